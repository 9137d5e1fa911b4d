//! JSON null handling
//!
//! A JSON input is "no value" when it is absent (`None`) or the literal
//! `null`. Both collapse a wrapper to its invalid state, so callers never need
//! to tell a missing key from an explicit null.

use crate::errors::Result;
use serde::Serialize;

const JSON_NULL: &[u8] = b"null";

/// Whether `data` represents NULL or "nothing" (JS `undefined`).
///
/// An empty slice is not null: it is malformed JSON and left to the decoder.
pub fn is_null(data: Option<&[u8]>) -> bool {
    match data {
        None => true,
        Some(data) => data == JSON_NULL,
    }
}

/// Byte-level marshal and unmarshal on top of the serde impls
pub trait JsonCodec: Serialize {
    /// Marshal as JSON; an invalid wrapper gives `null`
    fn marshal_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Unmarshal raw JSON, where `None` stands for an absent input.
    ///
    /// The validity flag is set before the inner value is decoded: when
    /// decoding fails, the wrapper is left valid with its previous value.
    fn unmarshal_json(&mut self, data: Option<&[u8]>) -> Result<()>;
}

/// Implements [`JsonCodec`] for wrappers following the null-equivalence rule.
///
/// The target needs `Default`, `DeserializeOwned` and a `valid` field.
macro_rules! impl_json_codec {
    (impl[$($gen:tt)*] for $name:ty $(where $($bound:tt)*)?) => {
        impl<$($gen)*> $crate::json::JsonCodec for $name $(where $($bound)*)? {
            fn unmarshal_json(&mut self, data: Option<&[u8]>) -> $crate::errors::Result<()> {
                let Some(data) = data.filter(|d| !$crate::json::is_null(Some(*d))) else {
                    $crate::trace_log!("{} unmarshalled as NULL", stringify!($name));
                    *self = Self::default();
                    return Ok(());
                };
                self.valid = true;
                *self = serde_json::from_slice(data)?;
                Ok(())
            }
        }
    };
}

pub(crate) use impl_json_codec;
