//! Database capability traits
//!
//! These are the contracts a wrapper, or a type parameter of a generic
//! wrapper, supplies to take part in database reads and writes.

use crate::errors::Result;
use type_mapping::DriverValue;

/// Reads a driver source value into `self`
pub trait Scanner {
    fn scan(&mut self, src: &DriverValue) -> Result<()>;
}

/// Produces the driver value to write for `self`
pub trait Valuer {
    fn value(&self) -> Result<DriverValue>;
}

/// Reads a driver source value into a destination supplied by the caller.
///
/// Used by [`NullableInto`](crate::NullableInto) for value types whose scan
/// should not go through their own receiver.
pub trait ScanInto: Sized {
    fn scan_into(src: &DriverValue, dst: &mut Self) -> Result<()>;
}

/// Requirements for values held by [`Nullable`](crate::Nullable)
pub trait NullableValue: Scanner + Valuer {}

impl<T: Scanner + Valuer> NullableValue for T {}

/// Requirements for values held by [`NullableInto`](crate::NullableInto)
pub trait NullableIntoValue: ScanInto + Valuer {}

impl<T: ScanInto + Valuer> NullableIntoValue for T {}
