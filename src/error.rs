//! Error types for the club fitting service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type used throughout the service layer
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A required form field was absent from the submission
    #[error("Missing form field: {0}")]
    MissingField(String),

    /// A measurement field could not be parsed as a number
    #[error("Invalid value for field {field}: {value:?}")]
    InvalidField { field: String, value: String },

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Error::MissingField(_) => (StatusCode::BAD_REQUEST, "Missing form field"),
            Error::InvalidField { .. } => (StatusCode::BAD_REQUEST, "Invalid form field"),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "Not found"),
            Error::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
            Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        let body = Json(json!({
            "error": error_message,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
