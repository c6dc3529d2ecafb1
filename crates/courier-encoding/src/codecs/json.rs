//! JSON codec wrapper (the default strategy).

use crate::json::{JsonDecoder, JsonEncoder};
use crate::{EncodingFormat, MessageData};

use super::types::{DeserializationError, MessageCodec, SerializationError};

/// Compact JSON message codec.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec {
    pub encoder: JsonEncoder,
    pub decoder: JsonDecoder,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self {
            encoder: JsonEncoder::new(),
            decoder: JsonDecoder::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        "json"
    }

    pub fn format(&self) -> EncodingFormat {
        EncodingFormat::Json
    }

    pub fn encode(&self, data: &MessageData) -> Result<Vec<u8>, SerializationError> {
        Ok(self.encoder.encode(data)?)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<MessageData, DeserializationError> {
        Ok(self.decoder.decode(bytes)?)
    }
}

impl MessageCodec for JsonCodec {
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
