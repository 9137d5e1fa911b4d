//! Type mapping definitions
//!
//! This module provides the closed set of values a database driver accepts
//! and returns at its boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Native driver values read from and written to the database
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum DriverValue {
    /// Database NULL
    #[default]
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    Text(String),
    Bytes(Vec<u8>),
    Time(DateTime<Utc>),
}

impl DriverValue {
    /// Whether this is a database NULL
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    /// Name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Bool(_) => "bool",
            DriverValue::Int64(_) => "int64",
            DriverValue::Float64(_) => "float64",
            DriverValue::Text(_) => "text",
            DriverValue::Bytes(_) => "bytes",
            DriverValue::Time(_) => "time",
        }
    }
}

/// Convert basic Rust types to DriverValue
impl From<String> for DriverValue {
    fn from(val: String) -> Self {
        DriverValue::Text(val)
    }
}

impl From<&str> for DriverValue {
    fn from(val: &str) -> Self {
        DriverValue::Text(val.to_string())
    }
}

impl From<i16> for DriverValue {
    fn from(val: i16) -> Self {
        DriverValue::Int64(val as i64)
    }
}

impl From<i32> for DriverValue {
    fn from(val: i32) -> Self {
        DriverValue::Int64(val as i64)
    }
}

impl From<i64> for DriverValue {
    fn from(val: i64) -> Self {
        DriverValue::Int64(val)
    }
}

// Promoted on write, narrowed again on read
impl From<f32> for DriverValue {
    fn from(val: f32) -> Self {
        DriverValue::Float64(val as f64)
    }
}

impl From<f64> for DriverValue {
    fn from(val: f64) -> Self {
        DriverValue::Float64(val)
    }
}

impl From<bool> for DriverValue {
    fn from(val: bool) -> Self {
        DriverValue::Bool(val)
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(val: Vec<u8>) -> Self {
        DriverValue::Bytes(val)
    }
}

impl From<&[u8]> for DriverValue {
    fn from(val: &[u8]) -> Self {
        DriverValue::Bytes(val.to_vec())
    }
}

/// UUIDs travel as hyphenated text
impl From<Uuid> for DriverValue {
    fn from(val: Uuid) -> Self {
        DriverValue::Text(val.hyphenated().to_string())
    }
}

impl From<DateTime<Utc>> for DriverValue {
    fn from(val: DateTime<Utc>) -> Self {
        DriverValue::Time(val)
    }
}

impl<T> From<Option<T>> for DriverValue
where
    T: Into<DriverValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => DriverValue::Null,
        }
    }
}
