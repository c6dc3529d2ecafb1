//! Decompression error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecompressionError {
    #[error("corrupt or truncated zlib stream: {0}")]
    Corrupt(#[from] std::io::Error),
    #[error("decompressed size exceeds the {0}-byte limit")]
    LimitExceeded(usize),
}
