// ABOUTME: Unified error type with error codes mapped to HTTP status and JSON bodies
// ABOUTME: Converts axum extractor rejections so every failure shares one wire shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

//! # Unified Error Handling
//!
//! Every fallible operation in the server returns [`AppError`]. Each error carries
//! an [`ErrorCode`] that determines the HTTP status, a human-readable message and
//! optional JSON details (for example the body returned by a failing upstream).
//!
//! The wire format is always:
//!
//! ```json
//! { "error": "name required", "code": "MISSING_REQUIRED_FIELD", "detail": { } }
//! ```

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField,

    // Resources
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,

    // Configuration
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing,

    // External services
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,
    #[serde(rename = "EXTERNAL_SERVICE_TIMEOUT")]
    ExternalServiceTimeout,

    // Internal
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidInput | Self::MissingRequiredField => StatusCode::BAD_REQUEST,
            Self::ResourceNotFound => StatusCode::NOT_FOUND,
            // Upstream failures are reported as plain server errors to the UI
            Self::ConfigMissing
            | Self::ExternalServiceError
            | Self::ExternalServiceTimeout
            | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable wire name of the code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::ConfigMissing => "CONFIG_MISSING",
            Self::ExternalServiceError => "EXTERNAL_SERVICE_ERROR",
            Self::ExternalServiceTimeout => "EXTERNAL_SERVICE_TIMEOUT",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceTimeout => "An external service did not respond in time",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Clone, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured diagnostic detail, `Null` when absent
    pub details: serde_json::Value,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing or blank
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} required"),
        )
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Missing configuration value
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service did not answer within the configured timeout
    #[must_use]
    pub fn external_timeout(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceTimeout,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// HTTP error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Machine-readable code
    pub code: ErrorCode,
    /// Optional diagnostic detail
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub detail: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: error.message,
            code: error.code,
            detail: error.details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        if status.is_server_error() {
            error!(code = self.code.as_str(), detail = %self.details, "{}", self.message);
        } else {
            warn!(code = self.code.as_str(), "{}", self.message);
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_input(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::invalid_input(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::invalid_input(format!("Invalid query string: {}", rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::ConfigMissing.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::ExternalServiceError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_wire_name_matches_serde() {
        for code in [
            ErrorCode::InvalidInput,
            ErrorCode::MissingRequiredField,
            ErrorCode::ResourceNotFound,
            ErrorCode::ConfigMissing,
            ErrorCode::ExternalServiceError,
            ErrorCode::ExternalServiceTimeout,
            ErrorCode::InternalError,
        ] {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, serde_json::Value::String(code.as_str().to_owned()));
        }
    }

    #[test]
    fn test_error_response_omits_null_detail() {
        let response = ErrorResponse::from(AppError::missing_field("name"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["error"], "name required");
        assert_eq!(json["code"], "MISSING_REQUIRED_FIELD");
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn test_error_response_keeps_detail() {
        let error = AppError::external_service("Groq", "API error (401)")
            .with_details(serde_json::json!({"error": {"message": "bad key"}}));
        let json = serde_json::to_value(ErrorResponse::from(error)).unwrap();

        assert_eq!(json["detail"]["error"]["message"], "bad key");
        assert_eq!(json["error"], "Groq: API error (401)");
    }
}
