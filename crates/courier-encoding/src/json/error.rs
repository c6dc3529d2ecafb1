//! JSON encoder/decoder error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("number is not finite")]
    NonFiniteNumber,
    #[error("top-level value is not an object")]
    NotAnObject,
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
