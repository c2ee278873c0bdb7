//! Write-check errors
//!
//! The error modes of the write-check workload.  Every error is fatal and
//! unrecovered: the binary propagates it to the process boundary and exits
//! with a non-zero status, so the surrounding validation harness observes
//! the failure immediately.
//!
//! ## Authors
//!
//! The Lustre CSI Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the write-check root directory for
//! information on licensing and copyright.

use err_derive::Error;
use std::{ffi::OsString, path::PathBuf};

/// The various different error modes associated with the write-check
/// workload.
#[derive(Debug, Error)]
pub enum WriteCheckError {
    /// The platform could not determine a hostname.  The program has no
    /// fallback identity.
    #[error(display = "Write-check: could not resolve the local hostname: {}.", _0)]
    HostResolutionError(#[error(source)] nix::Error),
    /// The platform returned a hostname that is not valid UTF-8.
    #[error(display = "Write-check: the resolved hostname {:?} is not valid UTF-8.", _0)]
    HostNotUtf8Error(OsString),
    /// The host-named output directory could not be created under the mount
    /// root.
    #[error(display = "Write-check: could not create output directory {:?}: {}.", _0, _1)]
    DirectoryCreateError(PathBuf, std::io::Error),
    /// The output file could not be created inside the output directory.
    #[error(display = "Write-check: could not create output file {:?}: {}.", _0, _1)]
    FileCreateError(PathBuf, std::io::Error),
    /// A write to the output file failed mid-loop.
    #[error(display = "Write-check: failed writing to output file {:?}: {}.", _0, _1)]
    WriteError(PathBuf, std::io::Error),
    /// The platform's secure random source failed or is unavailable.
    #[error(display = "Write-check: the platform random source failed: {}.", _0)]
    RandomSourceError(getrandom::Error),
}
