//! Conversions between [`MessageValue`] and the native value model.

use thiserror::Error;

use super::types::{NativeData, NativeValue};
use crate::{MessageData, MessageValue};

/// Raised when a native value has no equivalent in the JSON data model.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    #[error("binary value")]
    Binary,
    #[error("extension value")]
    Ext,
    #[error("non-string map key")]
    NonStringKey,
    #[error("string value is not valid UTF-8")]
    InvalidUtf8,
    #[error("integer out of range")]
    IntegerRange,
}

/// Convert a JSON-model value into the native model. Always succeeds; the
/// native model is a superset.
pub fn message_to_native(value: &MessageValue) -> NativeValue {
    match value {
        MessageValue::Null => NativeValue::Nil,
        MessageValue::Bool(b) => NativeValue::Boolean(*b),
        MessageValue::Integer(i) => NativeValue::Integer((*i).into()),
        MessageValue::UInteger(u) => NativeValue::Integer((*u).into()),
        MessageValue::Float(f) => NativeValue::F64(*f),
        MessageValue::Str(s) => NativeValue::String(s.as_str().into()),
        MessageValue::Array(arr) => {
            NativeValue::Array(arr.iter().map(message_to_native).collect())
        }
        MessageValue::Object(obj) => NativeValue::Map(
            obj.iter()
                .map(|(key, item)| {
                    (
                        NativeValue::String(key.as_str().into()),
                        message_to_native(item),
                    )
                })
                .collect(),
        ),
    }
}

/// Convert a native value into the JSON-model [`MessageValue`].
///
/// Fails for binary blobs, extension values, non-string map keys, and
/// strings that are not valid UTF-8.
pub fn native_to_message(value: &NativeValue) -> Result<MessageValue, ConvertError> {
    Ok(match value {
        NativeValue::Nil => MessageValue::Null,
        NativeValue::Boolean(b) => MessageValue::Bool(*b),
        NativeValue::Integer(n) => {
            if let Some(i) = n.as_i64() {
                MessageValue::Integer(i)
            } else if let Some(u) = n.as_u64() {
                MessageValue::UInteger(u)
            } else {
                return Err(ConvertError::IntegerRange);
            }
        }
        NativeValue::F32(f) => MessageValue::Float(f64::from(*f)),
        NativeValue::F64(f) => MessageValue::Float(*f),
        NativeValue::String(s) => {
            MessageValue::Str(s.as_str().ok_or(ConvertError::InvalidUtf8)?.to_owned())
        }
        NativeValue::Binary(_) => return Err(ConvertError::Binary),
        NativeValue::Ext(_, _) => return Err(ConvertError::Ext),
        NativeValue::Array(arr) => {
            let mut out = Vec::with_capacity(arr.len());
            for item in arr {
                out.push(native_to_message(item)?);
            }
            MessageValue::Array(out)
        }
        NativeValue::Map(entries) => {
            let mut out = Vec::with_capacity(entries.len());
            for (key, item) in entries {
                let key = match key {
                    NativeValue::String(s) => {
                        s.as_str().ok_or(ConvertError::InvalidUtf8)?.to_owned()
                    }
                    _ => return Err(ConvertError::NonStringKey),
                };
                out.push((key, native_to_message(item)?));
            }
            MessageValue::Object(out)
        }
    })
}

/// Convert a JSON-model mapping into a native mapping.
pub fn message_data_to_native(data: &MessageData) -> NativeData {
    data.iter()
        .map(|(key, value)| (key.clone(), message_to_native(value)))
        .collect()
}

/// Convert a native mapping into a JSON-model mapping.
pub fn native_data_to_message(data: &NativeData) -> Result<MessageData, ConvertError> {
    data.iter()
        .map(|(key, value)| Ok((key.clone(), native_to_message(value)?)))
        .collect()
}
