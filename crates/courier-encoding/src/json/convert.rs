//! Conversions between [`MessageValue`] and `serde_json::Value`.

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use super::error::JsonError;
use crate::MessageValue;

/// Convert a [`MessageValue`] into a `serde_json::Value`.
///
/// Fails when the value has no JSON representation (non-finite floats).
pub fn message_to_json(value: &MessageValue) -> Result<JsonValue, JsonError> {
    Ok(match value {
        MessageValue::Null => JsonValue::Null,
        MessageValue::Bool(b) => JsonValue::Bool(*b),
        MessageValue::Integer(i) => JsonValue::Number(Number::from(*i)),
        MessageValue::UInteger(u) => JsonValue::Number(Number::from(*u)),
        MessageValue::Float(f) => {
            JsonValue::Number(Number::from_f64(*f).ok_or(JsonError::NonFiniteNumber)?)
        }
        MessageValue::Str(s) => JsonValue::String(s.clone()),
        MessageValue::Array(arr) => {
            let mut out = Vec::with_capacity(arr.len());
            for item in arr {
                out.push(message_to_json(item)?);
            }
            JsonValue::Array(out)
        }
        MessageValue::Object(obj) => {
            let mut map = JsonMap::with_capacity(obj.len());
            for (key, item) in obj {
                map.insert(key.clone(), message_to_json(item)?);
            }
            JsonValue::Object(map)
        }
    })
}

/// Convert a parsed `serde_json::Value` into a [`MessageValue`].
pub fn json_to_message(value: JsonValue) -> MessageValue {
    match value {
        JsonValue::Null => MessageValue::Null,
        JsonValue::Bool(b) => MessageValue::Bool(b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                MessageValue::Integer(i)
            } else if let Some(u) = n.as_u64() {
                MessageValue::UInteger(u)
            } else if let Some(f) = n.as_f64() {
                MessageValue::Float(f)
            } else {
                // unreachable without the arbitrary_precision feature
                MessageValue::Null
            }
        }
        JsonValue::String(s) => MessageValue::Str(s),
        JsonValue::Array(arr) => {
            MessageValue::Array(arr.into_iter().map(json_to_message).collect())
        }
        JsonValue::Object(map) => MessageValue::Object(
            map.into_iter()
                .map(|(key, item)| (key, json_to_message(item)))
                .collect(),
        ),
    }
}
