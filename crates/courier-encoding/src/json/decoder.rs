//! JSON decoder for message metadata.

use serde_json::Value as JsonValue;

use super::convert::json_to_message;
use super::error::JsonError;
use crate::{MessageData, MessageValue};

/// Decodes UTF-8 JSON bytes back into a message mapping.
///
/// Invalid UTF-8, invalid grammar, trailing bytes, and non-object top-level
/// values all reject; no partial mapping is ever returned.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDecoder;

impl JsonDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode JSON bytes into a mapping.
    pub fn decode(&self, bytes: &[u8]) -> Result<MessageData, JsonError> {
        let value: JsonValue = serde_json::from_slice(bytes)?;
        match json_to_message(value) {
            MessageValue::Object(fields) => Ok(fields),
            _ => Err(JsonError::NotAnObject),
        }
    }
}
