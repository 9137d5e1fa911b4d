//! Error types for the nulls crate
//!
//! This module contains all error types that can be returned by the wrapper operations.

use std::fmt::Display;
use thiserror::Error;
use type_mapping::ConversionError;

#[derive(Error, Debug)]
pub enum NullsError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    /// Names the driver value kind that was received instead of bytes
    #[error("cannot convert to byte slice: {0}")]
    TypeMismatch(&'static str),

    /// The wrapper has no database support
    #[error("{0}")]
    Unsupported(&'static str),

    #[error("{0}")]
    Custom(String),
}

impl NullsError {
    /// Error for use in hand-written `Scanner`, `ScanInto` and `Valuer` impls
    pub fn custom(msg: impl Display) -> Self {
        NullsError::Custom(msg.to_string())
    }
}

pub type Result<T, E = NullsError> = std::result::Result<T, E>;
