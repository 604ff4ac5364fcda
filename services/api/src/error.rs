//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad request with message (missing fields, duplicate account)
    #[error("{0}")]
    BadRequest(String),

    /// Requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Credentials did not verify
    #[error("{0}")]
    Unauthorized(String),

    /// Anything unexpected: store unreachable, hashing failure, I/O
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(err) => {
                error!("Request failed: {:#}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // The failure's message text is the whole error contract.
        let body = Json(json!({
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::BadRequest("missing".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::NotFound("Book not found".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Unauthorized("Invalid password".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::Internal(anyhow::anyhow!("store unreachable")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = err.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_internal_error_carries_message() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused"));
        assert_eq!(err.to_string(), "connection refused");
    }
}
