use crate::driver::{NullableValue, Scanner, Valuer};
use crate::errors::Result;
use type_mapping::DriverValue;

generic_nullable! {
    /// Holds a nullable value that scans itself and produces its own driver
    /// value, typically another nullable scalar or a caller's custom type.
    Nullable
}

impl<T: NullableValue> Nullable<T> {
    /// Creates a valid `Nullable` with the given value
    pub fn new(v: T) -> Self {
        Self { v, valid: true }
    }
}

impl<T: Scanner + Default> Scanner for Nullable<T> {
    /// A NULL source resets the wrapper; anything else is handed to `T`
    /// untouched, and `T`'s error is returned as is.
    fn scan(&mut self, src: &DriverValue) -> Result<()> {
        if src.is_null() {
            *self = Self::default();
            return Ok(());
        }
        self.valid = true;
        self.v.scan(src)
    }
}

impl<T: Valuer> Valuer for Nullable<T> {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }
        self.v.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::stub::{Label, label};
    use crate::{Bool, Int64, JsonCodec, NullsError};
    use assert_matches::assert_matches;

    #[test]
    fn test_new() {
        let n = Nullable::new(Bool::new(true));
        assert!(n.valid);
        assert!(n.v.bool);
    }

    #[test]
    fn test_marshal_not_valid() {
        let n = Nullable { v: label("meow"), valid: false };
        assert_eq!(n.marshal_json().unwrap(), b"null");
    }

    #[test]
    fn test_marshal() {
        let n = Nullable::new(label("meow"));
        assert_eq!(serde_json::to_string(&n).unwrap(), "\"meow\"");
    }

    #[test]
    fn test_unmarshal_null() {
        let mut n = Nullable::new(label("meow"));
        n.unmarshal_json(Some(b"null")).unwrap();
        assert!(!n.valid);
        assert_eq!(n.v, Label::default());

        let n: Nullable<Label> = serde_json::from_str("null").unwrap();
        assert!(!n.valid);
    }

    #[test]
    fn test_unmarshal_fail() {
        let mut n = Nullable::<Label>::default();
        let err = n.unmarshal_json(Some(b"\"fail\"")).unwrap_err();
        assert_matches!(err, NullsError::Json(_));
        assert!(n.valid);
    }

    #[test]
    fn test_unmarshal() {
        let mut n = Nullable::<Label>::default();
        n.unmarshal_json(Some(b"\"meow\"")).unwrap();
        assert_eq!(n, Nullable::new(label("meow")));
    }

    #[test]
    fn test_scan_null() {
        let mut n = Nullable::new(label("meow"));
        n.scan(&DriverValue::Null).unwrap();
        assert!(!n.valid);
        assert_eq!(n.v, Label::default());
    }

    #[test]
    fn test_scan_fail() {
        let mut n = Nullable::<Label>::default();
        let err = n.scan(&DriverValue::Text("fail".to_string())).unwrap_err();
        assert_matches!(err, NullsError::Custom(msg) if msg == "sad life");
    }

    #[test]
    fn test_scan() {
        let mut n = Nullable::<Label>::default();
        n.scan(&DriverValue::Text("woof".to_string())).unwrap();
        assert_eq!(n, Nullable::new(label("woof")));
    }

    #[test]
    fn test_value_not_valid() {
        // T would fail, but is never asked
        let n = Nullable { v: label("fail"), valid: false };
        assert_eq!(n.value().unwrap(), DriverValue::Null);
    }

    #[test]
    fn test_value_fail() {
        let n = Nullable::new(label("fail"));
        assert!(n.value().is_err());
    }

    #[test]
    fn test_value() {
        let n = Nullable::new(label("meow"));
        assert_eq!(n.value().unwrap(), DriverValue::Text("meow".to_string()));
    }

    #[test]
    fn test_wrapping_scalar() {
        let mut n = Nullable::<Int64>::default();
        n.scan(&DriverValue::Int64(12)).unwrap();
        assert_eq!(n.into_option(), Some(Int64::new(12)));
    }
}
