//! Error types for the core row model and parsers.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while parsing row data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A serialized PnL series contained a token that is not a number.
    #[error("Malformed series token '{token}' at position {position}")]
    MalformedSeriesToken {
        /// Zero-based position of the offending token.
        position: usize,
        /// The offending token, trimmed.
        token: String,
    },

    /// A contract month string could not be parsed as a date.
    #[error("Invalid contract month '{value}'")]
    InvalidContractMonth {
        /// The unparseable input.
        value: String,
    },

    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },
}

impl CoreError {
    /// Create a malformed series token error.
    #[must_use]
    pub fn malformed_token(position: usize, token: impl Into<String>) -> Self {
        Self::MalformedSeriesToken {
            position,
            token: token.into(),
        }
    }

    /// Create an invalid contract month error.
    #[must_use]
    pub fn invalid_contract_month(value: impl Into<String>) -> Self {
        Self::InvalidContractMonth {
            value: value.into(),
        }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
