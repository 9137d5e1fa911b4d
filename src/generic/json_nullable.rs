use crate::driver::{Scanner, Valuer};
use crate::errors::{NullsError, Result};
use type_mapping::DriverValue;

const UNSUPPORTED: &str = "unsupported operation";

generic_nullable! {
    /// Holds a nullable value for JSON payloads only. `T` must be
    /// (de)serializable; `JsonNullable` cannot be scanned from or written to
    /// the database, and both operations fail regardless of validity.
    JsonNullable
}

impl<T> JsonNullable<T> {
    /// Creates a valid `JsonNullable` with the given value
    pub fn new(v: T) -> Self {
        Self { v, valid: true }
    }
}

impl<T> Scanner for JsonNullable<T> {
    fn scan(&mut self, _src: &DriverValue) -> Result<()> {
        crate::debug_log!("scan into JsonNullable rejected");
        Err(NullsError::Unsupported(UNSUPPORTED))
    }
}

impl<T> Valuer for JsonNullable<T> {
    fn value(&self) -> Result<DriverValue> {
        crate::debug_log!("value of JsonNullable rejected");
        Err(NullsError::Unsupported(UNSUPPORTED))
    }
}
