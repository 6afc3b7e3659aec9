//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use orgdir_domain::DomainError;
use serde_json::json;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request addressed a resource that does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The request body or parameters were malformed.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Unexpected server-side failure.
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Error surfaced by the domain layer.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
            ApiError::Domain(DomainError::NotFound { .. }) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Domain(DomainError::Validation { .. }) => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
