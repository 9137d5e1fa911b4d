use thiserror::Error;

/// A driver value could not be read as the requested Rust type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("unsupported source type {source_kind} for {target}")]
    UnsupportedSource {
        source_kind: &'static str,
        target: &'static str,
    },

    #[error("parsing {input:?} as {target}: {reason}")]
    Parse {
        input: String,
        target: &'static str,
        reason: String,
    },

    #[error("value {value} out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("source bytes are not valid UTF-8")]
    InvalidUtf8,
}
