//! JSON encoder/decoder family.

pub mod convert;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use convert::{json_to_message, message_to_json};
pub use decoder::JsonDecoder;
pub use encoder::JsonEncoder;
pub use error::JsonError;
