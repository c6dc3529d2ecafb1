//! MessagePack encoder for native message metadata.

use super::error::MsgPackError;
use super::types::{NativeData, NativeValue};

/// Encodes a native mapping as MessagePack.
///
/// Delegates to the `rmpv` value serializer, so the full native model is
/// supported, including values outside the JSON data model.
#[derive(Debug, Default, Clone, Copy)]
pub struct MsgPackEncoder;

impl MsgPackEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encode a mapping and return the MessagePack bytes.
    pub fn encode(&self, data: &NativeData) -> Result<Vec<u8>, MsgPackError> {
        let map = NativeValue::Map(
            data.iter()
                .map(|(key, value)| (NativeValue::String(key.as_str().into()), value.clone()))
                .collect(),
        );
        let mut out = Vec::new();
        rmpv::encode::write_value(&mut out, &map)?;
        Ok(out)
    }
}
