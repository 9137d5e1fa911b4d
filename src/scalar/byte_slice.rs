//! Byte slices travel as standard base64 text, both in JSON and to the
//! driver, since the target column affinity is textual.

use crate::driver::{Scanner, Valuer};
use crate::errors::Result;
use base64::{Engine, engine::general_purpose};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use type_mapping::DriverValue;

nullable_scalar! {
    /// Holds a nullable byte slice
    ByteSlice { byte_slice: Vec<u8> }
}

impl Serialize for ByteSlice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.valid {
            return serializer.serialize_none();
        }
        serializer.serialize_str(&general_purpose::STANDARD.encode(&self.byte_slice))
    }
}

impl<'de> Deserialize<'de> for ByteSlice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Some(encoded) = Option::<std::string::String>::deserialize(deserializer)? else {
            return Ok(Self::default());
        };
        let decoded = general_purpose::STANDARD
            .decode(encoded)
            .map_err(D::Error::custom)?;
        Ok(Self::new(decoded))
    }
}

impl Scanner for ByteSlice {
    fn scan(&mut self, src: &DriverValue) -> Result<()> {
        if src.is_null() {
            *self = Self::default();
            return Ok(());
        }
        let encoded = type_mapping::to_string(src)?;
        self.byte_slice = general_purpose::STANDARD.decode(encoded)?;
        self.valid = true;
        Ok(())
    }
}

impl Valuer for ByteSlice {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }
        Ok(DriverValue::Text(
            general_purpose::STANDARD.encode(&self.byte_slice),
        ))
    }
}
