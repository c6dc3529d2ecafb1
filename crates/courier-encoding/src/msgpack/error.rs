//! MessagePack encoder/decoder error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MsgPackError {
    #[error("write error: {0}")]
    Write(#[from] rmpv::encode::Error),
    #[error("read error: {0}")]
    Read(#[from] rmpv::decode::Error),
    #[error("top-level value is not a map")]
    NotAMap,
    #[error("map key is not a string")]
    NonStringKey,
    #[error("invalid UTF-8 in map key")]
    InvalidUtf8Key,
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
}
