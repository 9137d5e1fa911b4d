//! Raw JSON document wrapper
//!
//! **This wrapper does not follow the null-equivalence rule of the rest of
//! the crate.** The text `null` is a valid raw JSON document, and databases
//! such as PostgreSQL tell a NULL column apart from a JSONB column holding
//! `null`. Unmarshalling `null` therefore gives a *valid* wrapper whose
//! content is the four bytes `null`; only an absent input gives an invalid
//! one.
//!
//! A valid document is marshalled verbatim. Whitespace inside it is kept,
//! not compacted.

use crate::driver::{Scanner, Valuer};
use crate::errors::{NullsError, Result};
use crate::json::JsonCodec;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use type_mapping::DriverValue;

/// Holds a nullable raw JSON document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonRawMessage {
    /// The document bytes when valid
    pub raw_message: Vec<u8>,
    /// Whether a document rather than NULL is represented
    pub valid: bool,
}

impl JsonRawMessage {
    /// Creates a valid `JsonRawMessage` with the given document
    pub fn new(raw_message: impl Into<Vec<u8>>) -> Self {
        Self {
            raw_message: raw_message.into(),
            valid: true,
        }
    }

    pub fn as_option(&self) -> Option<&[u8]> {
        self.valid.then_some(self.raw_message.as_slice())
    }

    pub fn into_option(self) -> Option<Vec<u8>> {
        self.valid.then_some(self.raw_message)
    }
}

impl From<Option<Vec<u8>>> for JsonRawMessage {
    fn from(value: Option<Vec<u8>>) -> Self {
        match value {
            Some(raw) => Self::new(raw),
            None => Self::default(),
        }
    }
}

impl Serialize for JsonRawMessage {
    /// Emits the stored document verbatim, or `null` when invalid
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.valid {
            return serializer.serialize_none();
        }
        let raw: &RawValue = serde_json::from_slice(&self.raw_message).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for JsonRawMessage {
    /// Keeps any document, `null` included. A missing struct field needs
    /// `#[serde(default)]` to come out as an invalid wrapper.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Ok(Self::new(raw.get()))
    }
}

impl JsonCodec for JsonRawMessage {
    fn unmarshal_json(&mut self, data: Option<&[u8]>) -> Result<()> {
        // Not `is_null`: only an absent input is NULL here
        let Some(data) = data else {
            *self = Self::default();
            return Ok(());
        };
        self.valid = true;
        let raw: &RawValue = serde_json::from_slice(data)?;
        self.raw_message = raw.get().as_bytes().to_vec();
        Ok(())
    }
}

impl Scanner for JsonRawMessage {
    /// Copies a `Bytes` source into an owned buffer. Other non-NULL sources
    /// are a type mismatch.
    fn scan(&mut self, src: &DriverValue) -> Result<()> {
        match src {
            DriverValue::Null => {
                *self = Self::default();
                Ok(())
            }
            DriverValue::Bytes(bytes) => {
                self.raw_message = bytes.clone();
                self.valid = true;
                Ok(())
            }
            other => {
                crate::debug_log!("cannot scan {} into JsonRawMessage", other.kind());
                Err(NullsError::TypeMismatch(other.kind()))
            }
        }
    }
}

impl Valuer for JsonRawMessage {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }
        Ok(DriverValue::Bytes(self.raw_message.clone()))
    }
}
