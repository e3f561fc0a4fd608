//! Error types for wordcase

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, TransformError>;

/// A transform that could not produce a result for its input.
///
/// `operation` is the stable name of the failing operation (see
/// [`Operation::name`](crate::Operation::name)); `cause` is the lower-level
/// failure message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation} failed: {cause}")]
pub struct TransformError {
    pub operation: &'static str,
    pub cause: String,
}

impl TransformError {
    pub fn new(operation: &'static str, cause: impl Into<String>) -> Self {
        let cause = cause.into();
        log::debug!("{} failed: {}", operation, cause);
        Self { operation, cause }
    }

    /// Input was absent where a string was required
    pub fn missing_input(operation: &'static str) -> Self {
        Self::new(operation, "input is null")
    }
}

impl From<(&'static str, std::str::Utf8Error)> for TransformError {
    fn from((operation, err): (&'static str, std::str::Utf8Error)) -> Self {
        Self::new(operation, err.to_string())
    }
}
