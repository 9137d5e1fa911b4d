//! Generic nullable wrappers
//!
//! These wrap a caller-supplied `T` and differ only in what `T` must provide:
//!
//! * [`Nullable`]: `T` scans itself and produces a driver value;
//! * [`NullableInto`]: `T` scans into a destination handed to it and produces
//!   a driver value;
//! * [`JsonNullable`] and [`Optional`]: `T` only needs serde support, and the
//!   database operations always fail.
//!
//! JSON support is enforced where it is used: serializing needs
//! `T: Serialize`, deserializing needs `T: Deserialize + Default`.

/// Declares a generic wrapper `{ v: T, valid: bool }` with its `Option`
/// conversions, serde impls and byte-level JSON codec.
macro_rules! generic_nullable {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name<T> {
            /// The actual value when valid
            pub v: T,
            /// Whether a value rather than NULL is held
            pub valid: bool,
        }

        impl<T> $name<T> {
            pub fn as_option(&self) -> Option<&T> {
                self.valid.then_some(&self.v)
            }

            pub fn into_option(self) -> Option<T> {
                self.valid.then_some(self.v)
            }
        }

        impl<T: Default> From<Option<T>> for $name<T> {
            fn from(value: Option<T>) -> Self {
                match value {
                    Some(v) => Self { v, valid: true },
                    None => Self::default(),
                }
            }
        }

        impl<T: serde::Serialize> serde::Serialize for $name<T> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                if self.valid {
                    self.v.serialize(serializer)
                } else {
                    serializer.serialize_none()
                }
            }
        }

        impl<'de, T> serde::Deserialize<'de> for $name<T>
        where
            T: serde::Deserialize<'de> + Default,
        {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
                Ok(value.into())
            }
        }

        $crate::json::impl_json_codec!(
            impl[T] for $name<T> where T: serde::Serialize + serde::de::DeserializeOwned + Default
        );
    };
}

mod json_nullable;
mod nullable;
mod nullable_into;
mod optional;

pub use json_nullable::JsonNullable;
pub use nullable::Nullable;
pub use nullable_into::NullableInto;
pub use optional::Optional;
