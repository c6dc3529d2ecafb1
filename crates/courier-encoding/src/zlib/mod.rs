//! Lossless compression pass for encoded message bytes.
//!
//! Uses the zlib container (DEFLATE with header and checksum) at the fixed
//! default level, so compressed payloads carry a verifiable header and any
//! byte corruption surfaces as a [`DecompressionError`] rather than garbage
//! JSON.

pub mod error;

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

pub use error::DecompressionError;

/// Compress bytes into a zlib stream.
pub fn compress(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Decompress a zlib stream.
///
/// A crafted stream can expand to many times its compressed size;
/// `max_decoded_len` caps the decoded output and fails with
/// [`DecompressionError::LimitExceeded`] once the cap is passed. `None`
/// leaves the output unbounded.
pub fn decompress(
    bytes: &[u8],
    max_decoded_len: Option<usize>,
) -> Result<Vec<u8>, DecompressionError> {
    let mut decoder = ZlibDecoder::new(bytes);
    let mut out = Vec::new();
    match max_decoded_len {
        Some(limit) => {
            let mut bounded = decoder.take((limit as u64).saturating_add(1));
            bounded.read_to_end(&mut out)?;
            if out.len() > limit {
                return Err(DecompressionError::LimitExceeded(limit));
            }
        }
        None => {
            decoder.read_to_end(&mut out)?;
        }
    }
    Ok(out)
}
