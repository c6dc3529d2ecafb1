//! Aggregate codec holder and the configured strategy dispatch.

use crate::msgpack::{message_data_to_native, native_data_to_message, NativeData};
use crate::EncodingFormat;

use super::compressed::CompressedJsonCodec;
use super::json::JsonCodec;
use super::msgpack::MsgPackCodec;
use super::types::{DeserializationError, SerializationError};

/// Holder for one instance of every codec.
pub struct Codecs {
    pub json: JsonCodec,
    pub compressed_json: CompressedJsonCodec,
    pub msgpack: MsgPackCodec,
}

impl Default for Codecs {
    fn default() -> Self {
        Self::new()
    }
}

impl Codecs {
    pub fn new() -> Self {
        Self {
            json: JsonCodec::new(),
            compressed_json: CompressedJsonCodec::new(),
            msgpack: MsgPackCodec::new(),
        }
    }
}

/// The process-wide configured encoding strategy.
///
/// Constructed once at startup from the configured [`EncodingFormat`] and
/// shared read-only; there is no per-message strategy override and no
/// negotiation between producer and consumer. Both sides must be configured
/// with compatible strategies out of band.
///
/// The dispatch surface operates on [`NativeData`], the superset model. The
/// JSON-family variants reject values outside the JSON data model with
/// [`SerializationError::Unrepresentable`]; for compile-time rejection use
/// the typed codec structs directly.
#[derive(Debug, Clone, Copy)]
pub enum MessageEncoder {
    Json(JsonCodec),
    CompressedJson(CompressedJsonCodec),
    MsgPack(MsgPackCodec),
}

impl Default for MessageEncoder {
    fn default() -> Self {
        Self::from_format(EncodingFormat::default())
    }
}

impl MessageEncoder {
    /// Build the strategy selected by configuration.
    pub fn from_format(format: EncodingFormat) -> Self {
        match format {
            EncodingFormat::Json => MessageEncoder::Json(JsonCodec::new()),
            EncodingFormat::CompressedJson => {
                MessageEncoder::CompressedJson(CompressedJsonCodec::new())
            }
            EncodingFormat::MsgPack => MessageEncoder::MsgPack(MsgPackCodec::new()),
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            MessageEncoder::Json(codec) => codec.id(),
            MessageEncoder::CompressedJson(codec) => codec.id(),
            MessageEncoder::MsgPack(codec) => codec.id(),
        }
    }

    pub fn format(&self) -> EncodingFormat {
        match self {
            MessageEncoder::Json(codec) => codec.format(),
            MessageEncoder::CompressedJson(codec) => codec.format(),
            MessageEncoder::MsgPack(codec) => codec.format(),
        }
    }

    /// Convert message metadata into bytes for the transport.
    pub fn encode(&self, data: &NativeData) -> Result<Vec<u8>, SerializationError> {
        match self {
            MessageEncoder::Json(codec) => codec.encode(&native_data_to_message(data)?),
            MessageEncoder::CompressedJson(codec) => codec.encode(&native_data_to_message(data)?),
            MessageEncoder::MsgPack(codec) => codec.encode(data),
        }
    }

    /// Convert bytes from the transport back into message metadata.
    pub fn decode(&self, bytes: &[u8]) -> Result<NativeData, DeserializationError> {
        match self {
            MessageEncoder::Json(codec) => Ok(message_data_to_native(&codec.decode(bytes)?)),
            MessageEncoder::CompressedJson(codec) => {
                Ok(message_data_to_native(&codec.decode(bytes)?))
            }
            MessageEncoder::MsgPack(codec) => codec.decode(bytes),
        }
    }
}
