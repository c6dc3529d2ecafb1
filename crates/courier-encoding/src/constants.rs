//! Top-level constants for courier-encoding.

use std::str::FromStr;

use thiserror::Error;

/// Message encoding format identifier.
///
/// The set of formats is closed: strategy selection happens by picking one
/// of these variants at process configuration time, not by registering new
/// implementations at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingFormat {
    Json = 0,
    CompressedJson = 1,
    MsgPack = 2,
}

impl EncodingFormat {
    /// Stable identifier used in configuration files and wire metadata.
    pub fn id(&self) -> &'static str {
        match self {
            EncodingFormat::Json => "json",
            EncodingFormat::CompressedJson => "compressed-json",
            EncodingFormat::MsgPack => "msgpack",
        }
    }
}

impl Default for EncodingFormat {
    fn default() -> Self {
        EncodingFormat::Json
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown encoding format `{0}`")]
pub struct UnknownFormat(String);

impl FromStr for EncodingFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(EncodingFormat::Json),
            "compressed-json" => Ok(EncodingFormat::CompressedJson),
            "msgpack" => Ok(EncodingFormat::MsgPack),
            other => Err(UnknownFormat(other.to_owned())),
        }
    }
}
