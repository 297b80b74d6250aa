// ABOUTME: Unified error handling with error codes, user-facing messages, and HTTP mapping
// ABOUTME: Keeps storage and upstream details server-side while callers see short messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Recipe Server contributors

//! # Unified Error Handling System
//!
//! Every failure that reaches the request boundary is an [`AppError`]. The
//! error carries a [`ErrorCode`] (which fixes the HTTP status), the message
//! the caller is allowed to see, and optional details that are only written
//! to the server log.
//!
//! The response body is always `{ "message": "..." }`.

/// Storage error types
#[cfg(feature = "database-errors")]
pub mod database;

/// Recipe provider error types
#[cfg(feature = "provider-errors")]
pub mod provider;

#[cfg(feature = "database-errors")]
pub use database::DatabaseError;
#[cfg(feature = "provider-errors")]
pub use provider::RecipeApiError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation
    /// Input present but unusable
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Required field absent from the request
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField,
    /// Field present with the wrong shape
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat,
    /// Operation needs state that is not there yet
    #[serde(rename = "PRECONDITION_FAILED")]
    PreconditionFailed,

    // Resource Management
    /// Target record absent
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Dependency not ready to serve
    #[serde(rename = "RESOURCE_UNAVAILABLE")]
    ResourceUnavailable,

    // External Services
    /// Recipe provider call failed
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,

    // Internal
    /// Storage operation failed
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::PreconditionFailed => 400,

            Self::ResourceNotFound => 404,

            Self::ResourceUnavailable => 503,

            // Upstream failures surface as plain 500s; callers never learn
            // whether the provider or the store was at fault.
            Self::ExternalServiceError | Self::DatabaseError => 500,
        }
    }

    /// Get a short description of this error class
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::PreconditionFailed => "The operation cannot run in the current state",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceUnavailable => "The resource is temporarily unavailable",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::DatabaseError => "Database operation failed",
        }
    }

    /// Whether this code reports a server-side failure
    #[must_use]
    pub const fn is_server_error(self) -> bool {
        self.http_status() >= 500
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Message returned to the caller
    pub message: String,
    /// Server-side detail, logged but never returned
    pub details: Option<String>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach server-side detail (usually the underlying error)
    #[must_use]
    pub fn with_details(mut self, details: impl fmt::Display) -> Self {
        self.details = Some(details.to_string());
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({details})")?;
        }
        Ok(())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Body of every error response, and of plain acknowledgements
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

impl MessageResponse {
    /// Build a message body
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&AppError> for MessageResponse {
    fn from(error: &AppError) -> Self {
        Self::new(error.message.clone())
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Resource not found, message shown verbatim
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Field has the wrong shape
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Required state absent (e.g. empty inventory)
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PreconditionFailed, message)
    }

    /// Dependency not ready
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceUnavailable, message)
    }

    /// Database error with a caller-facing message and a logged cause
    pub fn database(message: impl Into<String>, cause: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, message).with_details(cause)
    }

    /// External service error with a caller-facing message and a logged cause
    pub fn external_service(message: impl Into<String>, cause: impl fmt::Display) -> Self {
        Self::new(ErrorCode::ExternalServiceError, message).with_details(cause)
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::{AppError, MessageResponse};
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;
    use tracing::{debug, error};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if self.code.is_server_error() {
                error!(
                    code = ?self.code,
                    details = self.details.as_deref().unwrap_or("none"),
                    "{}",
                    self.message
                );
            } else {
                debug!(code = ?self.code, "{}", self.message);
            }

            (status, Json(MessageResponse::from(&self))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::PreconditionFailed.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::ExternalServiceError.http_status(), 500);
        assert_eq!(ErrorCode::DatabaseError.http_status(), 500);
        assert_eq!(ErrorCode::ResourceUnavailable.http_status(), 503);
    }

    #[test]
    fn test_details_never_reach_message_response() {
        let error = AppError::external_service(
            "Failed to fetch recipes.",
            "HTTP 402 Payment Required: daily points limit reached",
        );

        let body = MessageResponse::from(&error);
        assert_eq!(body.message, "Failed to fetch recipes.");

        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("402"));
        assert!(error.to_string().contains("daily points limit"));
    }
}
