//! [`MessageValue`] — the JSON-restricted message metadata value model.

/// Message metadata as an ordered field mapping.
///
/// Each instance is owned by the call that created it; `decode` always
/// constructs a fresh mapping with no identity shared across calls.
pub type MessageData = Vec<(String, MessageValue)>;

/// A value restricted to the JSON data model.
///
/// Objects are ordered pair vectors, so field order is preserved through an
/// encode/decode round trip and encoding is deterministic for a given
/// logical input.
///
/// The integer/floating split is deliberate: a decoded number keeps the
/// numeric subtype it was encoded with. `1` round-trips as [`Integer`],
/// `1.0` as [`Float`].
///
/// [`Integer`]: MessageValue::Integer
/// [`Float`]: MessageValue::Float
#[derive(Debug, Clone, PartialEq)]
pub enum MessageValue {
    Null,
    Bool(bool),
    Integer(i64),
    UInteger(u64),
    Float(f64),
    Str(String),
    Array(Vec<MessageValue>),
    Object(Vec<(String, MessageValue)>),
}

impl From<bool> for MessageValue {
    fn from(b: bool) -> Self {
        MessageValue::Bool(b)
    }
}

impl From<i64> for MessageValue {
    fn from(i: i64) -> Self {
        MessageValue::Integer(i)
    }
}

impl From<u64> for MessageValue {
    fn from(u: u64) -> Self {
        MessageValue::UInteger(u)
    }
}

impl From<f64> for MessageValue {
    fn from(f: f64) -> Self {
        MessageValue::Float(f)
    }
}

impl From<&str> for MessageValue {
    fn from(s: &str) -> Self {
        MessageValue::Str(s.to_owned())
    }
}

impl From<String> for MessageValue {
    fn from(s: String) -> Self {
        MessageValue::Str(s)
    }
}

impl<T: Into<MessageValue>> From<Vec<T>> for MessageValue {
    fn from(values: Vec<T>) -> Self {
        MessageValue::Array(values.into_iter().map(Into::into).collect())
    }
}
