//! # Error Types
//!
//! Structured error types for complex_core. Arithmetic on [`Complex`](crate::Complex)
//! never fails; these errors only come out of text parsing and the I/O edges
//! around it.
//!
//! ## Example
//!
//! ```rust
//! use complex_core::errors::{ComplexError, ComplexResult};
//!
//! fn parse_part(field: &str, token: &str) -> ComplexResult<f64> {
//!     token
//!         .parse()
//!         .map_err(|_| ComplexError::invalid_input(field, token, "not a number"))
//! }
//!
//! assert!(parse_part("re", "1.5").is_ok());
//! assert_eq!(parse_part("im", "x").unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for complex_core operations
pub type ComplexResult<T> = Result<T, ComplexError>;

/// Structured error type for parsing and I/O around complex values.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ComplexError {
    /// A token could not be read as the expected value
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The input ended before a required part was read
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Extra text after the three expected tokens
    #[error("Unexpected trailing token: {token}")]
    UnexpectedToken { token: String },

    /// Reading from the underlying stream or file failed
    #[error("I/O error during {operation}: {reason}")]
    Io { operation: String, reason: String },

    /// Configuration could not be loaded or decoded
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

impl ComplexError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ComplexError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        ComplexError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnexpectedToken error
    pub fn unexpected_token(token: impl Into<String>) -> Self {
        ComplexError::UnexpectedToken {
            token: token.into(),
        }
    }

    /// Create an Io error
    pub fn io(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        ComplexError::Io {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(reason: impl Into<String>) -> Self {
        ComplexError::Config {
            reason: reason.into(),
        }
    }

    /// Check if this error came from the input text rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ComplexError::InvalidInput { .. }
                | ComplexError::MissingField { .. }
                | ComplexError::UnexpectedToken { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ComplexError::InvalidInput { .. } => "INVALID_INPUT",
            ComplexError::MissingField { .. } => "MISSING_FIELD",
            ComplexError::UnexpectedToken { .. } => "UNEXPECTED_TOKEN",
            ComplexError::Io { .. } => "IO_ERROR",
            ComplexError::Config { .. } => "CONFIG_ERROR",
        }
    }
}

impl From<std::io::Error> for ComplexError {
    fn from(err: std::io::Error) -> Self {
        ComplexError::io("read", err.to_string())
    }
}
