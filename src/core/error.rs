//! Typed error handling for the billing application
//!
//! Actions and stores surface failures through [`BillingError`] so
//! callers can branch on the category instead of inspecting a generic
//! `anyhow::Error`.
//!
//! # Error Categories
//!
//! - `Validation`: user-correctable bad input, keyed by form field
//! - `Storage`: a database call failed
//! - `Auth`: the identity provider rejected the request
//! - `Internal`: should not happen in normal operation
//!
//! Validation errors on the create path are recovered locally into UI
//! state; everything else propagates to the HTTP layer, where
//! [`IntoResponse`] maps it to a status code and a structured JSON body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use crate::core::validation::FieldErrors;

/// The main error type for the billing application
#[derive(Debug)]
pub enum BillingError {
    /// User-correctable bad input, keyed by form field
    Validation(FieldErrors),

    /// A database call failed
    Storage { operation: String, message: String },

    /// The identity provider rejected the request
    Auth { message: String },

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for BillingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingError::Validation(errors) => {
                write!(f, "Validation failed: {}", errors.summary())
            }
            BillingError::Storage { operation, message } => {
                write!(f, "Failed to {} invoice: {}", operation, message)
            }
            BillingError::Auth { message } => {
                write!(f, "Authentication failed: {}", message)
            }
            BillingError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for BillingError {}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl BillingError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BillingError::Validation(_) => StatusCode::BAD_REQUEST,
            BillingError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            BillingError::Auth { .. } => StatusCode::UNAUTHORIZED,
            BillingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BillingError::Validation(_) => "VALIDATION_ERROR",
            BillingError::Storage { .. } => "STORAGE_ERROR",
            BillingError::Auth { .. } => "AUTH_ERROR",
            BillingError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            BillingError::Validation(errors) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for BillingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// A specialized Result type for billing operations
pub type BillingResult<T> = Result<T, BillingError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn field_errors() -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.push("amount", "Please enter a valid amount.");
        errors
    }

    #[test]
    fn test_validation_error_returns_400() {
        let err = BillingError::Validation(field_errors());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_storage_error_returns_500() {
        let err = BillingError::Storage {
            operation: "insert".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "STORAGE_ERROR");
    }

    #[test]
    fn test_auth_error_returns_401() {
        let err = BillingError::Auth {
            message: "credentials rejected".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.error_code(), "AUTH_ERROR");
    }

    #[test]
    fn test_internal_error_returns_500() {
        let err = BillingError::Internal("template failure".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_storage_error_display() {
        let err = BillingError::Storage {
            operation: "delete".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("delete"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_validation_details_carry_field_map() {
        let err = BillingError::Validation(field_errors());
        let response = err.to_response();
        assert_eq!(response.code, "VALIDATION_ERROR");

        let details = response.details.expect("expected details");
        assert_eq!(
            details["fields"]["amount"][0],
            "Please enter a valid amount."
        );
    }

    #[test]
    fn test_non_validation_errors_have_no_details() {
        let err = BillingError::Internal("boom".to_string());
        assert!(err.to_response().details.is_none());
    }
}
