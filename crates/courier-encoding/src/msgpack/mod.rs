//! MessagePack encoder/decoder family (the opaque native-format strategy).

pub mod convert;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod types;

pub use convert::{
    message_data_to_native, message_to_native, native_data_to_message, native_to_message,
    ConvertError,
};
pub use decoder::MsgPackDecoder;
pub use encoder::MsgPackEncoder;
pub use error::MsgPackError;
pub use types::{NativeData, NativeValue};
