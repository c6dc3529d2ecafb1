//! Compressed JSON codec wrapper.

use crate::{zlib, EncodingFormat, MessageData};

use super::json::JsonCodec;
use super::types::{DeserializationError, MessageCodec, SerializationError};

/// JSON message codec with a zlib compression pass over the encoded bytes.
///
/// Transparent to callers: the value model, determinism, and round-trip
/// guarantees are those of [`JsonCodec`]. Decode failures distinguish a bad
/// compressed stream ([`DeserializationError::Decompression`]) from invalid
/// JSON inside a valid stream.
///
/// A crafted compressed payload can expand to many times its wire size.
/// Decoding is unbounded by default; callers decoding untrusted input should
/// install a ceiling with [`with_max_decoded_len`](Self::with_max_decoded_len).
#[derive(Debug, Default, Clone, Copy)]
pub struct CompressedJsonCodec {
    pub json: JsonCodec,
    max_decoded_len: Option<usize>,
}

impl CompressedJsonCodec {
    pub fn new() -> Self {
        Self {
            json: JsonCodec::new(),
            max_decoded_len: None,
        }
    }

    /// Cap the decoded size of incoming payloads.
    pub fn with_max_decoded_len(max_decoded_len: usize) -> Self {
        Self {
            json: JsonCodec::new(),
            max_decoded_len: Some(max_decoded_len),
        }
    }

    pub fn id(&self) -> &'static str {
        "compressed-json"
    }

    pub fn format(&self) -> EncodingFormat {
        EncodingFormat::CompressedJson
    }

    pub fn encode(&self, data: &MessageData) -> Result<Vec<u8>, SerializationError> {
        Ok(zlib::compress(&self.json.encode(data)?)?)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<MessageData, DeserializationError> {
        let decompressed = zlib::decompress(bytes, self.max_decoded_len)?;
        self.json.decode(&decompressed)
    }
}

impl MessageCodec for CompressedJsonCodec {
    type Data = MessageData;

    fn id(&self) -> &'static str {
        self.id()
    }

    fn format(&self) -> EncodingFormat {
        self.format()
    }

    fn encode(&self, data: &MessageData) -> Result<Vec<u8>, SerializationError> {
        self.encode(data)
    }

    fn decode(&self, bytes: &[u8]) -> Result<MessageData, DeserializationError> {
        self.decode(bytes)
    }
}
