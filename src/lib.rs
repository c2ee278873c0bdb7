//! The Lustre write-check library
//!
//! A smoke-test workload for validating that a Lustre volume, provisioned by
//! the CSI driver and mounted into the pod at a fixed root, is writable and
//! host-identifiable.  The library resolves the local host identity, ensures
//! a host-named output directory exists under the mount root, and writes a
//! fixed batch of random samples to a text file inside it.
//!
//! The binary in `main.rs` wires these steps together and reports the host
//! identity and the output directory on standard output, where the
//! surrounding validation harness can observe them.
//!
//! ## Authors
//!
//! The Lustre CSI Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the write-check root directory for
//! information on licensing and copyright.

pub mod error;
pub use self::error::*;
pub mod host;
pub mod random;
pub mod write_check;
pub use self::write_check::*;


////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// The fixed path under which the Lustre volume is mounted inside the pod.
pub const MOUNT_ROOT: &str = "/lustre";
/// The name of the output file written inside the host-named directory.
pub const OUTPUT_FILENAME: &str = "RandomNumbers.txt";
/// The number of random samples written to the output file on each run.
pub const SAMPLE_COUNT: usize = 10_000;
