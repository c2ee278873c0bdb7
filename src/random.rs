//! The platform random source
//!
//! A thin wrapper over the random number generator of the host operating
//! system, as provided by `getrandom`, together with the fixed decoding of
//! raw samples into signed 32-bit integers.  Samples are decoded
//! little-endian, the native byte order of the platforms the workload is
//! deployed on.
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
use byteorder::{ByteOrder, LittleEndian};

/// The width, in bytes, of a single raw random sample.
pub const SAMPLE_WIDTH: usize = 4;

/// Fills `buffer` with random bytes taken from the secure entropy source of
/// the host operating system.
///
/// Returns `WriteCheckError::RandomSourceError` if the entropy source is
/// unavailable or fails, in which case the contents of `buffer` are
/// undefined.
pub fn fill_random(buffer: &mut [u8]) -> Result<(), WriteCheckError> {
    if buffer.is_empty() {
        return Ok(());
    }
    getrandom::getrandom(buffer).map_err(WriteCheckError::RandomSourceError)
}

/// Decodes a raw sample as a signed 32-bit integer, little-endian.
pub fn decode_sample(sample: &[u8; SAMPLE_WIDTH]) -> i32 {
    LittleEndian::read_i32(sample)
}

/// Obtains one fresh signed 32-bit sample from the platform random source.
pub fn sample_i32() -> Result<i32, WriteCheckError> {
    let mut buffer = [0u8; SAMPLE_WIDTH];
    fill_random(&mut buffer)?;
    Ok(decode_sample(&buffer))
}
