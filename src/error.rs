//! API error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by handlers and the store gateway
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete request payload
    #[error("{0}")]
    Validation(String),

    /// Lookup matched nothing in the store
    #[error("{0}")]
    NotFound(String),

    /// The triple store rejected or never received a request
    #[error("store request failed: {0}")]
    Store(String),
}

/// JSON error body returned to clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR"),
        };
        (status, Json(ErrorBody::new(code, self.to_string()))).into_response()
    }
}
