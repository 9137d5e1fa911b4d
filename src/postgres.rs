//! PostgreSQL binding through sqlx
//!
//! Lets the wrappers be bound as query parameters and read from rows
//! directly. An invalid wrapper encodes as SQL NULL and SQL NULL decodes to an
//! invalid wrapper. `JsonNullable` and `Optional` have no binding.
//!
//! | Wrapper          | PostgreSQL type              |
//! |------------------|------------------------------|
//! | `Bool`           | `BOOLEAN`                    |
//! | `Int16`          | `SMALLINT`                   |
//! | `Int32`          | `INTEGER`                    |
//! | `Int64`          | `BIGINT`                     |
//! | `Float32`        | `REAL`                       |
//! | `Float64`        | `DOUBLE PRECISION`           |
//! | `String`         | `TEXT`, `VARCHAR`            |
//! | `ByteSlice`      | `TEXT` holding base64        |
//! | `Time`           | `TIMESTAMPTZ`                |
//! | `Uuid`           | `UUID`                       |
//! | `JsonRawMessage` | `JSONB`, `JSON`              |
//! | `Nullable<T>`, `NullableInto<T>` | same as `T`  |

use crate::generic::{Nullable, NullableInto};
use crate::raw_message::JsonRawMessage;
use crate::scalar::{Bool, ByteSlice, Float32, Float64, Int16, Int32, Int64, Time, Uuid};
use base64::{Engine, engine::general_purpose};
use chrono::{DateTime, Utc};
use serde_json::value::RawValue;
use sqlx::Type;
use sqlx::decode::Decode;
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
use sqlx::types::Json;

/// Delegates `Type`, `Encode` and `Decode` to the inner Rust type
macro_rules! pg_scalar {
    ($name:ty { $field:ident: $ty:ty }) => {
        impl Type<Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                <$ty as Type<Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <$ty as Type<Postgres>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, Postgres> for $name {
            fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
                if !self.valid {
                    return Ok(IsNull::Yes);
                }
                <$ty as Encode<'q, Postgres>>::encode_by_ref(&self.$field, buf)
            }
        }

        impl<'r> Decode<'r, Postgres> for $name {
            fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
                let value = <Option<$ty> as Decode<'r, Postgres>>::decode(value)?;
                Ok(value.into())
            }
        }
    };
}

pg_scalar!(Bool { bool: bool });
pg_scalar!(Int16 { int16: i16 });
pg_scalar!(Int32 { int32: i32 });
pg_scalar!(Int64 { int64: i64 });
pg_scalar!(Float32 { float32: f32 });
pg_scalar!(Float64 { float64: f64 });
pg_scalar!(crate::scalar::String { string: String });
pg_scalar!(Time { time: DateTime<Utc> });
pg_scalar!(Uuid { uuid: uuid::Uuid });

impl Type<Postgres> for ByteSlice {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for ByteSlice {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        if !self.valid {
            return Ok(IsNull::Yes);
        }
        let encoded = general_purpose::STANDARD.encode(&self.byte_slice);
        <String as Encode<'q, Postgres>>::encode_by_ref(&encoded, buf)
    }
}

impl<'r> Decode<'r, Postgres> for ByteSlice {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let Some(encoded) = <Option<String> as Decode<'r, Postgres>>::decode(value)? else {
            return Ok(Self::default());
        };
        Ok(Self::new(general_purpose::STANDARD.decode(encoded)?))
    }
}

// JSON null in the column stays a valid document; only SQL NULL is invalid
impl Type<Postgres> for JsonRawMessage {
    fn type_info() -> PgTypeInfo {
        <Json<Box<RawValue>> as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <Json<Box<RawValue>> as Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for JsonRawMessage {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        if !self.valid {
            return Ok(IsNull::Yes);
        }
        let raw: &RawValue = serde_json::from_slice(&self.raw_message)?;
        <Json<&RawValue> as Encode<'q, Postgres>>::encode_by_ref(&Json(raw), buf)
    }
}

impl<'r> Decode<'r, Postgres> for JsonRawMessage {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = <Option<Json<Box<RawValue>>> as Decode<'r, Postgres>>::decode(value)?;
        Ok(match raw {
            Some(Json(raw)) => Self::new(raw.get()),
            None => Self::default(),
        })
    }
}

impl<T: Type<Postgres>> Type<Postgres> for Nullable<T> {
    fn type_info() -> PgTypeInfo {
        T::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        T::compatible(ty)
    }
}

impl<'q, T: Encode<'q, Postgres>> Encode<'q, Postgres> for Nullable<T> {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        if !self.valid {
            return Ok(IsNull::Yes);
        }
        self.v.encode_by_ref(buf)
    }
}

impl<'r, T> Decode<'r, Postgres> for Nullable<T>
where
    T: Decode<'r, Postgres> + Default,
{
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        Ok(<Option<T> as Decode<'r, Postgres>>::decode(value)?.into())
    }
}

impl<T: Type<Postgres>> Type<Postgres> for NullableInto<T> {
    fn type_info() -> PgTypeInfo {
        T::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        T::compatible(ty)
    }
}

impl<'q, T: Encode<'q, Postgres>> Encode<'q, Postgres> for NullableInto<T> {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        if !self.valid {
            return Ok(IsNull::Yes);
        }
        self.v.encode_by_ref(buf)
    }
}

impl<'r, T> Decode<'r, Postgres> for NullableInto<T>
where
    T: Decode<'r, Postgres> + Default,
{
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        Ok(<Option<T> as Decode<'r, Postgres>>::decode(value)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::TypeInfo;

    fn type_name<T: Type<Postgres>>() -> String {
        T::type_info().name().to_string()
    }

    #[test]
    fn test_scalar_type_names() {
        assert_eq!(type_name::<Bool>(), "BOOL");
        assert_eq!(type_name::<Int16>(), "INT2");
        assert_eq!(type_name::<Int32>(), "INT4");
        assert_eq!(type_name::<Int64>(), "INT8");
        assert_eq!(type_name::<Float32>(), "FLOAT4");
        assert_eq!(type_name::<Float64>(), "FLOAT8");
        assert_eq!(type_name::<crate::scalar::String>(), "TEXT");
        assert_eq!(type_name::<ByteSlice>(), "TEXT");
        assert_eq!(type_name::<Time>(), "TIMESTAMPTZ");
        assert_eq!(type_name::<Uuid>(), "UUID");
    }

    #[test]
    fn test_composite_type_names() {
        assert_eq!(type_name::<JsonRawMessage>(), "JSONB");
        assert_eq!(type_name::<Nullable<Int64>>(), "INT8");
        assert_eq!(type_name::<NullableInto<Bool>>(), "BOOL");
    }

    #[test]
    fn test_invalid_encodes_null() {
        let mut buf = PgArgumentBuffer::default();
        assert!(matches!(Int64::default().encode_by_ref(&mut buf), Ok(IsNull::Yes)));
        assert!(matches!(ByteSlice::default().encode_by_ref(&mut buf), Ok(IsNull::Yes)));
        assert!(matches!(JsonRawMessage::default().encode_by_ref(&mut buf), Ok(IsNull::Yes)));
        assert!(matches!(
            Nullable::<Int64>::default().encode_by_ref(&mut buf),
            Ok(IsNull::Yes)
        ));
    }

    #[test]
    fn test_valid_encodes_value() {
        let mut buf = PgArgumentBuffer::default();
        assert!(matches!(Int64::new(3).encode_by_ref(&mut buf), Ok(IsNull::No)));
        assert!(matches!(
            crate::scalar::String::new("meow".to_string()).encode_by_ref(&mut buf),
            Ok(IsNull::No)
        ));
        assert!(matches!(JsonRawMessage::new("null").encode_by_ref(&mut buf), Ok(IsNull::No)));
    }

    #[test]
    fn test_malformed_raw_message_fails_to_encode() {
        let mut buf = PgArgumentBuffer::default();
        assert!(JsonRawMessage::new("Hello World!").encode_by_ref(&mut buf).is_err());
    }
}
