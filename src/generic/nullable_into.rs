use crate::driver::{NullableIntoValue, ScanInto, Scanner, Valuer};
use crate::errors::Result;
use type_mapping::DriverValue;

generic_nullable! {
    /// Holds a nullable value that is scanned through [`ScanInto`]. Use this
    /// instead of [`Nullable`](crate::Nullable) when the value type should
    /// receive its scan result in a destination slot rather than through its
    /// own receiver.
    NullableInto
}

impl<T: NullableIntoValue> NullableInto<T> {
    /// Creates a valid `NullableInto` with the given value
    pub fn new(v: T) -> Self {
        Self { v, valid: true }
    }
}

impl<T: ScanInto + Default> Scanner for NullableInto<T> {
    fn scan(&mut self, src: &DriverValue) -> Result<()> {
        if src.is_null() {
            *self = Self::default();
            return Ok(());
        }
        self.valid = true;
        T::scan_into(src, &mut self.v)
    }
}

impl<T: Valuer> Valuer for NullableInto<T> {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }
        self.v.value()
    }
}
