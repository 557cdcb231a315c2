//! HTTP status mapping for task API failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Task API error response.
///
/// Error bodies are plain text carrying the underlying error message;
/// only success responses are JSON. Lookup failures map to 404 and every
/// other failure to 500. 400 exists only under strict body validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Request body failed strict validation.
    #[error("{0}")]
    BadRequest(String),
    /// The addressed task does not exist or its identifier is malformed.
    #[error("{0}")]
    NotFound(String),
    /// The storage layer failed.
    #[error("{0}")]
    Storage(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
