//! Convenience re-exports for common nulls usage
//!
//! This prelude re-exports the wrappers and capability traits, so a single
//! `use nulls::prelude::*;` is enough to declare nullable fields and drive
//! them.
//!
//! The string wrapper is not included: a glob import of it would
//! shadow `std::string::String`. Refer to it as `nulls::String`.
//!
//! # Example
//!
//! ```rust
//! use nulls::prelude::*;
//!
//! let id = Int64::new(7);
//! assert_eq!(id.value().unwrap(), DriverValue::Int64(7));
//! ```

// Scalar wrappers
pub use crate::scalar::{Bool, ByteSlice, Float32, Float64, Int16, Int32, Int64, Time, Uuid};

// Generic wrappers
pub use crate::generic::{JsonNullable, Nullable, NullableInto, Optional};
pub use crate::raw_message::JsonRawMessage;

// Capability traits
pub use crate::driver::{NullableIntoValue, NullableValue, ScanInto, Scanner, Valuer};
pub use crate::json::JsonCodec;

// Errors and driver values
pub use crate::errors::NullsError;
pub use type_mapping::{ConversionError, DriverValue};
