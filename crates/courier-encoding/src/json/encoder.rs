//! Compact JSON encoder for message metadata.

use serde_json::{Map as JsonMap, Value as JsonValue};

use super::convert::message_to_json;
use super::error::JsonError;
use crate::MessageData;

/// Encodes a message mapping as compact UTF-8 JSON.
///
/// Output uses the most compact separators (no whitespace between tokens)
/// and is deterministic for a given logical input: objects are ordered, so
/// equal mappings produce identical bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEncoder;

impl JsonEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encode a mapping and return the JSON bytes.
    pub fn encode(&self, data: &MessageData) -> Result<Vec<u8>, JsonError> {
        let mut map = JsonMap::with_capacity(data.len());
        for (key, value) in data {
            map.insert(key.clone(), message_to_json(value)?);
        }
        Ok(serde_json::to_vec(&JsonValue::Object(map))?)
    }
}
