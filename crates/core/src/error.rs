//! Error types for freqwave Core

use thiserror::Error;

/// Conversion error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("expected 1 or 2 arguments, got {given}")]
    Usage { given: usize },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("unknown unit '{unit}'")]
    UnknownUnit { unit: String },
}

impl ConvertError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ConvertError::InvalidInput { reason: reason.into() }
    }
}

/// Result type for freqwave Core operations
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConvertError::UnknownUnit { unit: "Furlong".to_string() };
        assert_eq!(err.to_string(), "unknown unit 'Furlong'");

        let err = ConvertError::invalid("value must be positive");
        assert_eq!(err.to_string(), "invalid input: value must be positive");

        let err = ConvertError::Usage { given: 3 };
        assert_eq!(err.to_string(), "expected 1 or 2 arguments, got 3");
    }
}
