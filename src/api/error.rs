//! HTTP error type for the upload surface.
//!
//! Implements [`IntoResponse`] so handlers can use `?` and still produce
//! the documented status codes and plain-string bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The uploaded file contained no bytes.
    #[error("Attached file is empty")]
    EmptyFile,

    /// The request was malformed (no file field, broken multipart stream).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Validation aborted unexpectedly.
    #[error("Error while validating file: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::EmptyFile | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(message) => {
                log::error!("validation failed: {message}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
