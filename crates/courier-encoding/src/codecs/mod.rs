//! Message codec strategies, their shared contract, and the configured
//! dispatch.

mod compressed;
mod json;
mod msgpack;
mod registry;
mod types;

pub use compressed::CompressedJsonCodec;
pub use json::JsonCodec;
pub use msgpack::MsgPackCodec;
pub use registry::{Codecs, MessageEncoder};
pub use types::{DeserializationError, MessageCodec, SerializationError};
