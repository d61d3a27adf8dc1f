//! # Student API Errors
//!
//! Maps service failures onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use super::store::StoreError;

/// Result type for student operations
pub type StudentResult<T> = Result<T, StudentError>;

/// Student API errors
#[derive(Debug, Error)]
pub enum StudentError {
    /// Request body did not bind to a student record
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No record with this identifier
    #[error("Student not found: {0}")]
    NotFound(String),

    /// Backing store failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl StudentError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StudentError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            StudentError::NotFound(_) => StatusCode::NOT_FOUND,
            StudentError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&StudentError> for ErrorResponse {
    fn from(err: &StudentError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
    }
}
