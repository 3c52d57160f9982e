//! Error types shared across the Energy Tracker crates

use thiserror::Error;

/// Form field error raised while turning a raw submission into numbers
///
/// Any of these discards the whole submission; no partial state is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("missing required field `{0}`")]
    Missing(&'static str),

    #[error("field `{0}` could not be parsed")]
    Malformed(&'static str),

    #[error("field `{field}` out of range: {message}")]
    OutOfRange {
        field: &'static str,
        message: String,
    },
}

impl FieldError {
    /// The name of the offending form field
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Missing(field) => field,
            FieldError::Malformed(field) => field,
            FieldError::OutOfRange { field, .. } => field,
        }
    }

    pub fn out_of_range(field: &'static str, message: impl Into<String>) -> Self {
        FieldError::OutOfRange {
            field,
            message: message.into(),
        }
    }
}
