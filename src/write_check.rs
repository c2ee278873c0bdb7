//! The write-check proper
//!
//! Ensures the host-named output directory exists under the mount root and
//! writes the batch of random samples to the output file.  Directory
//! creation is idempotent across runs; file creation truncates any previous
//! run's output.  A failure at any step aborts the run without cleanup: a
//! partially-written file from an interrupted run is simply replaced by the
//! next successful one.
//!
//! ## Authors
//!
//! The Lustre CSI Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the write-check root directory for
//! information on licensing and copyright.

use crate::{error::WriteCheckError, random, OUTPUT_FILENAME, SAMPLE_COUNT};
use log::info;
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Ensures the output directory for `host` exists under `mount_root`,
/// creating it and any missing parents if absent.  Succeeds without touching
/// the filesystem if the directory is already present from an earlier run.
///
/// Returns the path of the directory, or
/// `WriteCheckError::DirectoryCreateError` if the mount is absent or the
/// path is not writable.
pub fn ensure_output_directory(
    mount_root: &Path,
    host: &str,
) -> Result<PathBuf, WriteCheckError> {
    let directory = mount_root.join(host);
    create_dir_all(&directory)
        .map_err(|err| WriteCheckError::DirectoryCreateError(directory.clone(), err))?;
    Ok(directory)
}

/// Creates (or truncates) the output file inside `directory` and writes
/// `SAMPLE_COUNT` random samples to it, one `Random: <value>` line per
/// sample.  The file handle is released on every exit path, including a
/// write failure mid-loop; buffered output is flushed before success is
/// reported so a deferred write failure still surfaces.
///
/// Returns the path of the written file.
pub fn write_random_numbers(directory: &Path) -> Result<PathBuf, WriteCheckError> {
    let path = directory.join(OUTPUT_FILENAME);

    // 1. Create the file fresh, replacing any previous run's output.
    let file =
        File::create(&path).map_err(|err| WriteCheckError::FileCreateError(path.clone(), err))?;
    let mut stream = BufWriter::new(file);

    // 2. Write the samples, one line each.
    for _ in 0..SAMPLE_COUNT {
        let sample = random::sample_i32()?;
        writeln!(stream, "Random: {}", sample)
            .map_err(|err| WriteCheckError::WriteError(path.clone(), err))?;
    }

    // 3. Flush so buffered write failures surface before success is claimed.
    stream
        .flush()
        .map_err(|err| WriteCheckError::WriteError(path.clone(), err))?;

    info!("Wrote {} samples to {:?}.", SAMPLE_COUNT, path);

    Ok(path)
}
