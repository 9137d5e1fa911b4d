//! # nulls
//!
//! Nullable wrapper types that bridge three representations of "no value": a
//! database NULL, a JSON `null` or absent field, and an in-memory empty state.
//!
//! Every wrapper pairs a value with a `valid` flag and supports four
//! operations: marshal and unmarshal (through serde, or byte-level through
//! [`JsonCodec`]), scan from a [`DriverValue`] ([`Scanner`]) and produce a
//! driver value ([`Valuer`]).
//!
//! JSON `null` and an absent field are treated the same: both give an invalid
//! wrapper. The one exception is [`JsonRawMessage`], for which the text `null`
//! is a regular document.
//!
//! ## Quick Start
//!
//! ```rust
//! use nulls::prelude::*;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Flags {
//!     a: Bool,
//!     b: Bool,
//!     c: Bool,
//! }
//!
//! let flags: Flags = serde_json::from_str(r#"{"a": true, "b": null}"#).unwrap();
//! assert!(flags.a.valid && flags.a.bool);
//! assert!(!flags.b.valid);
//! assert!(!flags.c.valid);
//!
//! let mut count = Int32::default();
//! count.scan(&DriverValue::Int64(12)).unwrap();
//! assert_eq!(count.into_option(), Some(12));
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod driver;
pub mod errors;
pub mod generic;
pub mod json;
pub mod postgres;
pub mod prelude;
pub mod raw_message;
pub mod scalar;

// Re-export the main public types for convenience
pub use driver::{NullableIntoValue, NullableValue, ScanInto, Scanner, Valuer};
pub use errors::{NullsError, Result};
pub use generic::{JsonNullable, Nullable, NullableInto, Optional};
pub use json::{JsonCodec, is_null};
pub use raw_message::JsonRawMessage;
pub use scalar::{Bool, ByteSlice, Float32, Float64, Int16, Int32, Int64, String, Time, Uuid};

// Re-export internal crates used in the public API
pub use type_mapping;
pub use type_mapping::{ConversionError, DriverValue};
