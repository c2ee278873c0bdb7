//! Host identity resolution
//!
//! Resolution of the pod's network name, which keys the output directory
//! under the mount root.  Pods running concurrently against the same volume
//! write to disjoint directories because each resolves a distinct hostname.
//!
//! ## Authors
//!
//! The Lustre CSI Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the write-check root directory for
//! information on licensing and copyright.

use crate::error::WriteCheckError;
use nix::unistd::gethostname;

/// Resolves the local host's network name.  This is a local operating system
/// call, requiring no DNS round-trip.  The name is obtained once, at
/// start-up, and is immutable for the lifetime of the process.
///
/// Returns `WriteCheckError::HostResolutionError` if the platform cannot
/// determine a hostname, or `WriteCheckError::HostNotUtf8Error` if the
/// resolved name is not valid UTF-8.
pub fn resolve_host_identity() -> Result<String, WriteCheckError> {
    let raw = gethostname().map_err(WriteCheckError::HostResolutionError)?;
    raw.into_string().map_err(WriteCheckError::HostNotUtf8Error)
}
