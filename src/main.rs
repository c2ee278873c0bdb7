//! The Lustre write-check workload
//!
//! A demonstration workload for validating that the Lustre volume mounted at
//! `/lustre` is writable from inside the pod.  Resolves the local hostname,
//! creates a host-named directory under the mount root, writes 10,000 random
//! signed 32-bit integers to `RandomNumbers.txt` inside it, and exits.  The
//! resolved hostname and the output directory are reported on standard
//! output so the validation harness can observe them.
//!
//! Any failure is fatal and terminates the process with a non-zero exit
//! status.  To see verbose output of what is happening, set `RUST_LOG=info`
//! before executing.
//!
//! ## Authors
//!
//! The Lustre CSI Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the write-check root directory for
//! information on licensing and copyright.

use anyhow::Result;
use log::info;
use lustre_write_check::{
    host::resolve_host_identity,
    write_check::{ensure_output_directory, write_random_numbers},
    MOUNT_ROOT,
};
use std::path::Path;

/// Entry point: runs the write-check against the fixed mount root.
fn main() -> Result<()> {
    env_logger::init();

    let host = resolve_host_identity()?;
    println!("Host: {}", host);

    let directory = ensure_output_directory(Path::new(MOUNT_ROOT), &host)?;
    println!("Folder: {}", directory.display());

    let output = write_random_numbers(&directory)?;
    info!("Write-check complete: {:?}.", output);

    Ok(())
}
