nullable_scalar! {
    /// Holds a nullable `i16`
    #[derive(Copy)]
    Int16 { int16: i16 }
}

nullable_scalar! {
    /// Holds a nullable `i32`
    #[derive(Copy)]
    Int32 { int32: i32 }
}

nullable_scalar! {
    /// Holds a nullable `i64`
    #[derive(Copy)]
    Int64 { int64: i64 }
}

scalar_serde!(Int16 { int16: i16 });
scalar_serde!(Int32 { int32: i32 });
scalar_serde!(Int64 { int64: i64 });

// All widths are written as int64 and narrowed with a range check on read
scalar_driver!(Int16 { int16 }, type_mapping::to_i16);
scalar_driver!(Int32 { int32 }, type_mapping::to_i32);
scalar_driver!(Int64 { int64 }, type_mapping::to_i64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConversionError, DriverValue, JsonCodec, NullsError, Scanner, Valuer};
    use assert_matches::assert_matches;

    #[test]
    fn test_json_round_trip() {
        let i = Int32::new(-12);
        let raw = i.marshal_json().unwrap();
        assert_eq!(raw, b"-12");

        let mut back = Int32::default();
        back.unmarshal_json(Some(&raw)).unwrap();
        assert_eq!(back, i);
    }

    #[test]
    fn test_marshal_not_valid() {
        let i = Int64 { int64: 9, valid: false };
        assert_eq!(serde_json::to_string(&i).unwrap(), "null");
    }

    #[test]
    fn test_unmarshal_null() {
        let mut i = Int16::new(4);
        i.unmarshal_json(Some(b"null")).unwrap();
        assert_eq!(i, Int16::default());
    }

    #[test]
    fn test_unmarshal_out_of_range() {
        let res: Result<Int16, _> = serde_json::from_str("70000");
        assert!(res.is_err());
    }

    #[test]
    fn test_scan_narrowing() {
        let mut i = Int16::default();
        i.scan(&DriverValue::Int64(-300)).unwrap();
        assert_eq!(i, Int16::new(-300));

        let err = i.scan(&DriverValue::Int64(1 << 20)).unwrap_err();
        assert_matches!(
            err,
            NullsError::Conversion(ConversionError::OutOfRange { target: "int16", .. })
        );
        // a failed scan leaves the previous value
        assert_eq!(i, Int16::new(-300));
    }

    #[test]
    fn test_scan_text() {
        let mut i = Int64::default();
        i.scan(&DriverValue::Bytes(b"1234567890123".to_vec())).unwrap();
        assert_eq!(i.int64, 1_234_567_890_123);
        assert!(i.valid);
    }

    #[test]
    fn test_scan_null() {
        let mut i = Int32::new(5);
        i.scan(&DriverValue::Null).unwrap();
        assert!(!i.valid);
        assert_eq!(i.int32, 0);
    }

    #[test]
    fn test_value() {
        assert_eq!(Int16::new(7).value().unwrap(), DriverValue::Int64(7));
        assert_eq!(Int32::new(-7).value().unwrap(), DriverValue::Int64(-7));
        assert_eq!(Int64::default().value().unwrap(), DriverValue::Null);
    }
}
