//! Error types for the salary engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while estimating pay.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the salary engine.
///
/// Every fallible operation returns this error type. A computation either
/// succeeds completely or fails with one of these variants; partial results
/// are never returned.
///
/// # Example
///
/// ```
/// use eps_salary_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "overtime_hours".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input 'overtime_hours': must not be negative"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configured constant is outside its allowed range.
    #[error("Invalid configuration '{field}': {message}")]
    ConfigurationError {
        /// The configuration field that was rejected.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// No wage constants are effective on the requested date.
    #[error("No wage constants effective on {date}")]
    RateNotFound {
        /// The date for which constants were requested.
        date: NaiveDate,
    },

    /// A caller-supplied input was rejected.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A display label table was requested for an unknown locale.
    #[error("Unsupported locale: {code}")]
    UnsupportedLocale {
        /// The locale code that was requested.
        code: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// An [`EngineError::InvalidInput`] for a value whose result does not
    /// fit in a `Decimal`.
    pub fn value_too_large(field: impl Into<String>) -> Self {
        Self::invalid_input(field, "value too large")
    }

    /// Shorthand for an [`EngineError::ConfigurationError`].
    pub fn configuration(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
