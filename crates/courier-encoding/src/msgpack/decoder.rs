//! MessagePack decoder for native message metadata.

use std::io::Cursor;

use super::error::MsgPackError;
use super::types::{NativeData, NativeValue};

/// Decodes MessagePack bytes back into a native mapping.
///
/// The top-level value must be a map with string keys; trailing bytes after
/// the value reject. No partial mapping is ever returned.
#[derive(Debug, Default, Clone, Copy)]
pub struct MsgPackDecoder;

impl MsgPackDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode MessagePack bytes into a mapping.
    pub fn decode(&self, bytes: &[u8]) -> Result<NativeData, MsgPackError> {
        let mut cursor = Cursor::new(bytes);
        let value = rmpv::decode::read_value(&mut cursor)?;
        let consumed = cursor.position() as usize;
        if consumed != bytes.len() {
            return Err(MsgPackError::TrailingBytes(bytes.len() - consumed));
        }
        let entries = match value {
            NativeValue::Map(entries) => entries,
            _ => return Err(MsgPackError::NotAMap),
        };
        let mut data = Vec::with_capacity(entries.len());
        for (key, item) in entries {
            let key = match key {
                NativeValue::String(s) => s.into_str().ok_or(MsgPackError::InvalidUtf8Key)?,
                _ => return Err(MsgPackError::NonStringKey),
            };
            data.push((key, item));
        }
        Ok(data)
    }
}
