//! Error handling module for the favorites service.
//!
//! Provides centralized error types with mapping to HTTP status codes and
//! the frontend's response bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed required fields on a write
    Validation(String),
    /// Uniqueness violation: the favorite already exists for this user
    Conflict(String),
    /// Database error
    Database(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg) => msg,
            AppError::Conflict(msg) => msg,
            AppError::Database(msg) => msg,
            AppError::Internal(msg) => msg,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Client-caused errors carry `message`, server failures carry `error`.
        let body = match &self {
            AppError::Validation(msg) | AppError::Conflict(msg) => {
                serde_json::json!({ "message": msg })
            }
            AppError::Database(msg) | AppError::Internal(msg) => {
                serde_json::json!({ "error": msg })
            }
        };

        (status, Json(body)).into_response()
    }
}
