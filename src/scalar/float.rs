nullable_scalar! {
    /// Holds a nullable `f32`
    #[derive(Copy)]
    Float32 { float32: f32 }
}

nullable_scalar! {
    /// Holds a nullable `f64`
    #[derive(Copy)]
    Float64 { float64: f64 }
}

/// Like `scalar_serde!`, but a valid NaN or infinity is an error instead of
/// serde_json's silent `null`
macro_rules! float_serde {
    ($name:ident { $field:ident: $ty:ty }) => {
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                if !self.valid {
                    return serializer.serialize_none();
                }
                if !self.$field.is_finite() {
                    return Err(serde::ser::Error::custom(format!(
                        "unsupported value: {}",
                        self.$field
                    )));
                }
                serde::Serialize::serialize(&self.$field, serializer)
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

float_serde!(Float32 { float32: f32 });
float_serde!(Float64 { float64: f64 });

// Float32 is promoted to float64 on write and narrowed on read
scalar_driver!(Float32 { float32 }, type_mapping::to_f32);
scalar_driver!(Float64 { float64 }, type_mapping::to_f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DriverValue, JsonCodec, NullsError, Scanner, Valuer};
    use assert_matches::assert_matches;

    #[test]
    fn test_float32_value_is_promoted() {
        let f = Float32::new(32.0);
        assert_eq!(f.value().unwrap(), DriverValue::Float64(32.0));
    }

    #[test]
    fn test_float32_scan_narrows() {
        let mut f = Float32::default();
        f.scan(&DriverValue::Float64(32.0)).unwrap();
        assert_eq!(f, Float32::new(32.0));

        f.scan(&DriverValue::Int64(3)).unwrap();
        assert_eq!(f.float32, 3.0);
    }

    #[test]
    fn test_float64_json() {
        let f: Float64 = serde_json::from_str("2.5").unwrap();
        assert_eq!(f, Float64::new(2.5));
        assert_eq!(f.marshal_json().unwrap(), b"2.5");
        assert_eq!(Float64::default().marshal_json().unwrap(), b"null");
    }

    #[test]
    fn test_marshal_non_finite() {
        let err = Float64::new(f64::NAN).marshal_json().unwrap_err();
        assert_matches!(err, NullsError::Json(_));
        assert!(err.to_string().contains("NaN"));

        assert!(Float32::new(f32::INFINITY).marshal_json().is_err());
        assert!(serde_json::to_string(&Float64::new(f64::NEG_INFINITY)).is_err());

        // invalid wrappers never look at the value
        let f = Float64 { float64: f64::NAN, valid: false };
        assert_eq!(f.marshal_json().unwrap(), b"null");
    }

    #[test]
    fn test_scan_null() {
        let mut f = Float64::new(1.0);
        f.scan(&DriverValue::Null).unwrap();
        assert_eq!(f, Float64::default());
        assert_eq!(f.value().unwrap(), DriverValue::Null);
    }

    #[test]
    fn test_scan_bad_text() {
        let mut f = Float64::default();
        assert!(f.scan(&DriverValue::Text("one".to_string())).is_err());
        assert!(!f.valid);
    }
}
