use crate::driver::{Scanner, Valuer};
use crate::errors::{NullsError, Result};
use type_mapping::DriverValue;

generic_nullable! {
    /// Holds an optional value. Use this instead of
    /// [`Nullable`](crate::Nullable) or [`NullableInto`](crate::NullableInto)
    /// when a field is optional in JSON but never persisted directly.
    Optional
}

impl<T> Optional<T> {
    /// Creates a valid `Optional` with the given value
    pub fn new(v: T) -> Self {
        Self { v, valid: true }
    }
}

/// Always fails; use `Nullable` or `NullableInto` for database fields
impl<T> Scanner for Optional<T> {
    fn scan(&mut self, _src: &DriverValue) -> Result<()> {
        crate::debug_log!("scan into Optional rejected");
        Err(NullsError::Unsupported("cannot scan optional"))
    }
}

/// Always fails; use `Nullable` or `NullableInto` for database fields
impl<T> Valuer for Optional<T> {
    fn value(&self) -> Result<DriverValue> {
        crate::debug_log!("value of Optional rejected");
        Err(NullsError::Unsupported("cannot value optional"))
    }
}
