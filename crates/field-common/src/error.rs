//! Error types for scattered-field gridding.

use thiserror::Error;

/// Result type alias using FieldError.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Primary error type shared by the core engine and its collaborators.
#[derive(Debug, Error)]
pub enum FieldError {
    /// A precondition on construction arguments was violated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An aggregate (bounding box, value range) was requested on an empty set.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A data row could not be parsed as three floating-point fields.
    #[error("Parse failure on line {line}: {message}")]
    ParseFailure { line: usize, message: String },

    /// Evaluation was aborted through a cancel flag.
    #[error("Evaluation cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(String),
}

impl FieldError {
    /// Create an InvalidArgument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an EmptyInput error.
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Create a ParseFailure error.
    pub fn parse_failure(line: usize, msg: impl Into<String>) -> Self {
        Self::ParseFailure {
            line,
            message: msg.into(),
        }
    }

    /// Short machine-readable code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::InvalidArgument(_) => "InvalidArgument",
            FieldError::EmptyInput(_) => "EmptyInput",
            FieldError::ParseFailure { .. } => "ParseFailure",
            FieldError::Cancelled => "Cancelled",
            FieldError::Io(_) => "Io",
        }
    }
}

impl From<std::io::Error> for FieldError {
    fn from(err: std::io::Error) -> Self {
        FieldError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(FieldError::invalid_argument("x").code(), "InvalidArgument");
        assert_eq!(FieldError::empty_input("x").code(), "EmptyInput");
        assert_eq!(FieldError::parse_failure(3, "bad").code(), "ParseFailure");
        assert_eq!(FieldError::Cancelled.code(), "Cancelled");
    }

    #[test]
    fn test_parse_failure_display() {
        let err = FieldError::parse_failure(7, "expected 3 fields, found 2");
        assert_eq!(
            err.to_string(),
            "Parse failure on line 7: expected 3 fields, found 2"
        );
    }
}
