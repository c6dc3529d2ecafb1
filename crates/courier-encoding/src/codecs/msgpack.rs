//! MessagePack codec wrapper (the opaque native-format strategy).

use crate::msgpack::{MsgPackDecoder, MsgPackEncoder, NativeData};
use crate::EncodingFormat;

use super::types::{DeserializationError, MessageCodec, SerializationError};

/// Opaque MessagePack message codec.
///
/// Handles the full native value model, including binary and extension
/// values the JSON family cannot represent. The trade-offs:
///
/// - the produced bytes are an implementation detail, not guaranteed stable
///   across versions; never treat them as a long-term persisted or
///   cross-system format. Only value-level round-trip equality holds;
/// - decoding untrusted input can allocate disproportionately to the wire
///   size for crafted payloads.
///
/// This strategy is opt-in only and never the default; producer and
/// consumer must both be configured for it out of band.
#[derive(Debug, Default, Clone, Copy)]
pub struct MsgPackCodec {
    pub encoder: MsgPackEncoder,
    pub decoder: MsgPackDecoder,
}

impl MsgPackCodec {
    pub fn new() -> Self {
        Self {
            encoder: MsgPackEncoder::new(),
            decoder: MsgPackDecoder::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        "msgpack"
    }

    pub fn format(&self) -> EncodingFormat {
        EncodingFormat::MsgPack
    }

    pub fn encode(&self, data: &NativeData) -> Result<Vec<u8>, SerializationError> {
        Ok(self.encoder.encode(data)?)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<NativeData, DeserializationError> {
        Ok(self.decoder.decode(bytes)?)
    }
}

impl MessageCodec for MsgPackCodec {
    type Data = NativeData;

    fn id(&self) -> &'static str {
        self.id()
    }

    fn format(&self) -> EncodingFormat {
        self.format()
    }

    fn encode(&self, data: &NativeData) -> Result<Vec<u8>, SerializationError> {
        self.encode(data)
    }

    fn decode(&self, bytes: &[u8]) -> Result<NativeData, DeserializationError> {
        self.decode(bytes)
    }
}
