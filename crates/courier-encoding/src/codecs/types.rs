//! Common codec trait and the unified error taxonomy.

use crate::json::JsonError;
use crate::msgpack::{ConvertError, MsgPackError};
use crate::zlib::DecompressionError;
use crate::EncodingFormat;

/// Raised by `encode` when a value cannot be represented in the target
/// format.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("JSON encode error: {0}")]
    Json(#[from] JsonError),
    #[error("MessagePack encode error: {0}")]
    MsgPack(#[from] MsgPackError),
    #[error("value not representable in the JSON data model: {0}")]
    Unrepresentable(#[from] ConvertError),
    #[error("compression error: {0}")]
    Compression(#[from] std::io::Error),
}

/// Raised by `decode` when bytes are malformed for the target format.
#[derive(Debug, thiserror::Error)]
pub enum DeserializationError {
    #[error("JSON decode error: {0}")]
    Json(#[from] JsonError),
    #[error("MessagePack decode error: {0}")]
    MsgPack(#[from] MsgPackError),
    #[error("decompression error: {0}")]
    Decompression(#[from] DecompressionError),
}

/// Trait for message metadata codecs.
///
/// `Data` is the value model a codec operates on: the JSON-restricted
/// [`MessageData`](crate::MessageData) for the text-format family, the
/// native [`NativeData`](crate::NativeData) for the opaque strategy. Keeping
/// the two models apart in the type system means an opaque-only value cannot
/// reach a JSON-only codec by accident.
///
/// Codecs are stateless and never perform I/O; `encode` and `decode` may be
/// called concurrently from any number of threads. A failed call never
/// yields partial output, and no codec falls back to another strategy.
pub trait MessageCodec {
    type Data;

    fn id(&self) -> &'static str;
    fn format(&self) -> EncodingFormat;
    fn encode(&self, data: &Self::Data) -> Result<Vec<u8>, SerializationError>;
    fn decode(&self, bytes: &[u8]) -> Result<Self::Data, DeserializationError>;
}
