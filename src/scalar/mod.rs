//! Nullable scalar wrappers
//!
//! One wrapper per primitive. Each holds the value in a field named after the
//! primitive plus a `valid` flag, and follows the same contract: JSON `null`
//! or absent input gives an invalid wrapper, `DriverValue::Null` scans to an
//! invalid wrapper with a default value, and an invalid wrapper writes
//! `DriverValue::Null`.

/// Declares a scalar wrapper with its constructor, `Option` conversions and
/// byte-level JSON codec.
macro_rules! nullable_scalar {
    ($(#[$meta:meta])* $name:ident { $field:ident: $ty:ty }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            /// The actual value when valid
            pub $field: $ty,
            /// Whether a value rather than NULL is represented
            pub valid: bool,
        }

        impl $name {
            /// Creates a valid wrapper holding the given value
            pub fn new($field: $ty) -> Self {
                Self { $field, valid: true }
            }

            pub fn as_option(&self) -> Option<&$ty> {
                self.valid.then_some(&self.$field)
            }

            pub fn into_option(self) -> Option<$ty> {
                self.valid.then_some(self.$field)
            }
        }

        impl From<Option<$ty>> for $name {
            fn from(value: Option<$ty>) -> Self {
                match value {
                    Some(v) => Self::new(v),
                    None => Self::default(),
                }
            }
        }

        impl From<$name> for Option<$ty> {
            fn from(value: $name) -> Self {
                value.into_option()
            }
        }

        $crate::json::impl_json_codec!(impl[] for $name);
    };
}

/// Serde impls writing the inner value directly, or `null` when invalid
macro_rules! scalar_serde {
    ($name:ident { $field:ident: $ty:ty }) => {
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                if self.valid {
                    serde::Serialize::serialize(&self.$field, serializer)
                } else {
                    serializer.serialize_none()
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value: Option<$ty> = serde::Deserialize::deserialize(deserializer)?;
                Ok(value.into())
            }
        }
    };
}

/// `Scanner` and `Valuer` through a `type_mapping` conversion function
macro_rules! scalar_driver {
    ($name:ident { $field:ident }, $convert:path) => {
        impl $crate::driver::Scanner for $name {
            fn scan(&mut self, src: &type_mapping::DriverValue) -> $crate::errors::Result<()> {
                if src.is_null() {
                    *self = Self::default();
                    return Ok(());
                }
                $crate::trace_log!("scanning {} into {}", src.kind(), stringify!($name));
                self.$field = $convert(src)?;
                self.valid = true;
                Ok(())
            }
        }

        impl $crate::driver::Valuer for $name {
            fn value(&self) -> $crate::errors::Result<type_mapping::DriverValue> {
                if !self.valid {
                    return Ok(type_mapping::DriverValue::Null);
                }
                Ok(type_mapping::DriverValue::from(self.$field.clone()))
            }
        }
    };
}

mod boolean;
mod byte_slice;
mod float;
mod identifier;
mod int;
mod text;
mod time;

pub use boolean::Bool;
pub use byte_slice::ByteSlice;
pub use float::{Float32, Float64};
pub use identifier::Uuid;
pub use int::{Int16, Int32, Int64};
pub use text::String;
pub use time::Time;
