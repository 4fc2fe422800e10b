//! Response types for the salary engine API.
//!
//! This module defines the success payloads, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::display::DisplayReport;
use crate::error::EngineError;
use crate::models::{ExchangeResult, PayrollResult, SeveranceEstimate, SeveranceResult};

/// Success body shared by every endpoint: the raw result and its rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse<T> {
    /// Engine values at full precision.
    pub result: T,
    /// Formatted, localized rendering of `result`.
    pub display: DisplayReport,
}

/// Response body of the `/salary` endpoint.
pub type SalaryResponse = CalculationResponse<PayrollResult>;

/// Response body of the `/severance` endpoint.
pub type SeveranceResponse = CalculationResponse<SeveranceResult>;

/// Response body of the `/severance/estimate` endpoint.
pub type SeveranceEstimateResponse = CalculationResponse<SeveranceEstimate>;

/// Response body of the `/exchange` endpoint.
pub type ExchangeResponse = CalculationResponse<ExchangeResult>;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::ConfigurationError { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "CONFIGURATION_ERROR",
                    format!("Invalid configuration '{}': {}", field, message),
                    "A rate or deduction setting is outside its allowed range",
                ),
            },
            EngineError::RateNotFound { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RATE_NOT_FOUND",
                    format!("No wage constants effective on {}", date),
                    "The requested date precedes every configured rate file",
                ),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input '{}': {}", field, message),
                    field,
                ),
            },
            EngineError::UnsupportedLocale { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("UNSUPPORTED_LOCALE", format!("Unsupported locale: {}", code)),
            },
        }
    }
}
