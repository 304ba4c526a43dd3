//! Error types with HTTP status code mapping.
//!
//! [`BookingError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "invalid request: participants must be between 1 and 10",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`BookingError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category          | HTTP Status               |
/// |-----------|-------------------|---------------------------|
/// | 1000–1999 | Validation        | 400 Bad Request           |
/// | 2000–2999 | Conflict          | 409 Conflict              |
/// | 3000–3999 | Server            | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// Request validation failed (missing or out-of-range fields).
    #[error("invalid request: {0}")]
    Validation(String),

    /// A booking with the candidate reference already exists. The booking
    /// service retries with a fresh reference; this never reaches the
    /// HTTP caller unless retries are exhausted.
    #[error("booking reference already taken: {0}")]
    ReferenceConflict(String),

    /// Every reference candidate collided within the retry bound.
    #[error("failed to generate a unique booking reference")]
    ReferenceExhausted,

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Confirmation email failure. Logged by the booking service and
    /// never propagated to the HTTP caller.
    #[error("mail error: {0}")]
    Mail(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl BookingError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::ReferenceConflict(_) => 2001,
            Self::Persistence(_) => 3001,
            Self::ReferenceExhausted => 3002,
            Self::Mail(_) => 3003,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::ReferenceConflict(_) => StatusCode::CONFLICT,
            Self::Persistence(_) | Self::ReferenceExhausted | Self::Mail(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = BookingError::Validation("missing required field: tourName".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1001);
    }

    #[test]
    fn conflict_maps_to_conflict() {
        let err = BookingError::ReferenceConflict("OSLO-2025-00001".to_string());
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), 2001);
    }

    #[test]
    fn exhaustion_maps_to_server_error() {
        let err = BookingError::ReferenceExhausted;
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_body_carries_code_and_message() {
        let err = BookingError::Validation("participants must be between 1 and 10".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
