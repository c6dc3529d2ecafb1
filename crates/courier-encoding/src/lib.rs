//! Message metadata codecs for courier (JSON, compressed JSON, MessagePack).
//!
//! A message's metadata is an ordered mapping of named fields describing a
//! unit of work. This crate converts such mappings to and from bytes through
//! one of a closed set of strategies:
//!
//! - [`JsonCodec`]: compact, deterministic, human-inspectable JSON over the
//!   JSON-restricted [`MessageValue`] model. The default.
//! - [`CompressedJsonCodec`]: the JSON codec with a zlib pass over the
//!   encoded bytes.
//! - [`MsgPackCodec`]: opaque MessagePack over the native [`NativeValue`]
//!   model, for values the JSON family cannot represent. Opt-in only; its
//!   bytes are not a stable cross-version format.
//!
//! The strategy is process-wide configuration: build a [`MessageEncoder`]
//! from the configured [`EncodingFormat`] once at startup and share it. The
//! transport collaborator treats the produced bytes as opaque.

mod constants;
mod message_value;

pub mod codecs;
pub mod json;
pub mod msgpack;
pub mod zlib;

pub use codecs::{
    Codecs, CompressedJsonCodec, DeserializationError, JsonCodec, MessageCodec, MessageEncoder,
    MsgPackCodec, SerializationError,
};
pub use constants::{EncodingFormat, UnknownFormat};
pub use message_value::{MessageData, MessageValue};
pub use msgpack::{NativeData, NativeValue};
pub use zlib::DecompressionError;
