//! Error types for quoting operations.

use thiserror::Error;

/// Error codes for quote processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Material not found in catalog (2)
    MaterialNotFound = 2,
    /// Catalog has no entries (3)
    NoMaterials = 3,
    /// Input value could not be used (4)
    InvalidValue = 4,
    /// Order rejected by validation (5)
    ValidationFailed = 5,
    /// Rates or catalog file could not be decoded (6)
    InvalidConfig = 6,
    /// File could not be read (7)
    Io = 7,
}

/// Main error type for the quote calculator.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Material not found: {name}")]
    MaterialNotFound { name: String },

    #[error("Materials catalog is empty")]
    NoMaterials,

    #[error("Invalid value for '{field}': expected {expected}, got '{value}'")]
    InvalidValue {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Order rejected: {}", errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    /// Build an `InvalidValue` error.
    pub fn invalid_value(
        field: impl Into<String>,
        expected: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        QuoteError::InvalidValue {
            field: field.into(),
            expected: expected.into(),
            value: value.into(),
        }
    }

    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::MaterialNotFound { .. } => ErrorCode::MaterialNotFound,
            QuoteError::NoMaterials => ErrorCode::NoMaterials,
            QuoteError::InvalidValue { .. } => ErrorCode::InvalidValue,
            QuoteError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            QuoteError::InvalidConfig { .. } => ErrorCode::InvalidConfig,
            QuoteError::Io(_) => ErrorCode::Io,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::InvalidConfig {
            message: err.to_string(),
        }
    }
}

/// Result type alias for quote operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
