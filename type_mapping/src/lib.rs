//! Unified type mapping between Rust scalars and database driver values
//! This crate provides the driver value model and the conversion rules used by the nulls wrappers

pub mod convert;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use convert::{
    to_bool, to_f32, to_f64, to_i16, to_i32, to_i64, to_string, to_time, to_uuid,
};
pub use errors::ConversionError;
pub use types::DriverValue;
