//! Driver value conversion utilities
//!
//! This module reads a driver source value as a concrete Rust scalar, using
//! the narrowest conversion that cannot silently lose information (except the
//! explicit float64 to float32 narrowing). Callers handle `DriverValue::Null`
//! themselves; passing it here is reported as an unsupported source.

use crate::errors::ConversionError;
use crate::types::DriverValue;
use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

fn unsupported(src: &DriverValue, target: &'static str) -> ConversionError {
    ConversionError::UnsupportedSource {
        source_kind: src.kind(),
        target,
    }
}

/// Textual view of a `Text` or `Bytes` source
fn source_str(src: &DriverValue) -> Result<Option<&str>, ConversionError> {
    match src {
        DriverValue::Text(s) => Ok(Some(s.as_str())),
        DriverValue::Bytes(b) => std::str::from_utf8(b)
            .map(Some)
            .map_err(|_| ConversionError::InvalidUtf8),
        _ => Ok(None),
    }
}

fn parse_bool(input: &str) -> Result<bool, ConversionError> {
    match input {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConversionError::Parse {
            input: input.to_string(),
            target: "bool",
            reason: "invalid syntax".to_string(),
        }),
    }
}

/// Read a boolean from `Bool`, an `Int64` of 0 or 1, or boolean text
pub fn to_bool(src: &DriverValue) -> Result<bool, ConversionError> {
    match src {
        DriverValue::Bool(b) => Ok(*b),
        DriverValue::Int64(1) => Ok(true),
        DriverValue::Int64(0) => Ok(false),
        DriverValue::Int64(i) => Err(ConversionError::OutOfRange {
            value: i.to_string(),
            target: "bool",
        }),
        _ => match source_str(src)? {
            Some(s) => parse_bool(s),
            None => Err(unsupported(src, "bool")),
        },
    }
}

fn float_to_i64(f: f64, target: &'static str) -> Result<i64, ConversionError> {
    if !f.is_finite() || f.fract() != 0.0 {
        return Err(ConversionError::Parse {
            input: f.to_string(),
            target,
            reason: "not an integer".to_string(),
        });
    }
    // i64::MAX as f64 rounds up to 2^63, which itself is out of range
    if f < i64::MIN as f64 || f >= i64::MAX as f64 {
        return Err(ConversionError::OutOfRange {
            value: f.to_string(),
            target,
        });
    }
    Ok(f as i64)
}

fn to_int<T>(src: &DriverValue, target: &'static str) -> Result<T, ConversionError>
where
    T: TryFrom<i64>,
{
    let wide = match src {
        DriverValue::Int64(i) => *i,
        DriverValue::Float64(f) => float_to_i64(*f, target)?,
        _ => match source_str(src)? {
            Some(s) => s.parse::<i64>().map_err(|e| ConversionError::Parse {
                input: s.to_string(),
                target,
                reason: e.to_string(),
            })?,
            None => return Err(unsupported(src, target)),
        },
    };

    T::try_from(wide).map_err(|_| ConversionError::OutOfRange {
        value: wide.to_string(),
        target,
    })
}

pub fn to_i16(src: &DriverValue) -> Result<i16, ConversionError> {
    to_int(src, "int16")
}

pub fn to_i32(src: &DriverValue) -> Result<i32, ConversionError> {
    to_int(src, "int32")
}

pub fn to_i64(src: &DriverValue) -> Result<i64, ConversionError> {
    to_int(src, "int64")
}

/// Read a float from `Float64`, `Int64`, or numeric text
pub fn to_f64(src: &DriverValue) -> Result<f64, ConversionError> {
    match src {
        DriverValue::Float64(f) => Ok(*f),
        DriverValue::Int64(i) => Ok(*i as f64),
        _ => match source_str(src)? {
            Some(s) => s.parse::<f64>().map_err(|e| ConversionError::Parse {
                input: s.to_string(),
                target: "float64",
                reason: e.to_string(),
            }),
            None => Err(unsupported(src, "float64")),
        },
    }
}

/// Same sources as [`to_f64`], narrowed to single precision
pub fn to_f32(src: &DriverValue) -> Result<f32, ConversionError> {
    to_f64(src).map(|f| f as f32)
}

/// Read text. Scalars are formatted; times use RFC 3339 with trailing
/// zeros dropped from the fraction.
pub fn to_string(src: &DriverValue) -> Result<String, ConversionError> {
    match src {
        DriverValue::Bool(b) => Ok(b.to_string()),
        DriverValue::Int64(i) => Ok(i.to_string()),
        DriverValue::Float64(f) => Ok(f.to_string()),
        DriverValue::Time(t) => Ok(rfc3339_trimmed(t)),
        _ => match source_str(src)? {
            Some(s) => Ok(s.to_string()),
            None => Err(unsupported(src, "string")),
        },
    }
}

fn rfc3339_trimmed(t: &DateTime<Utc>) -> String {
    let formatted = t.to_rfc3339_opts(SecondsFormat::Nanos, true);
    let body = formatted.trim_end_matches('Z');
    match body.split_once('.') {
        Some((secs, frac)) => match frac.trim_end_matches('0') {
            "" => format!("{secs}Z"),
            frac => format!("{secs}.{frac}Z"),
        },
        None => formatted,
    }
}

pub fn to_time(src: &DriverValue) -> Result<DateTime<Utc>, ConversionError> {
    match src {
        DriverValue::Time(t) => Ok(*t),
        other => Err(unsupported(other, "time")),
    }
}

/// Read a UUID from 16 raw bytes or from its textual form
pub fn to_uuid(src: &DriverValue) -> Result<Uuid, ConversionError> {
    if let DriverValue::Bytes(b) = src {
        if b.len() == 16 {
            return Uuid::from_slice(b).map_err(|e| ConversionError::Parse {
                input: format!("{:?}", b),
                target: "uuid",
                reason: e.to_string(),
            });
        }
    }

    match source_str(src)? {
        Some(s) => Uuid::parse_str(s).map_err(|e| ConversionError::Parse {
            input: s.to_string(),
            target: "uuid",
            reason: e.to_string(),
        }),
        None => Err(unsupported(src, "uuid")),
    }
}
