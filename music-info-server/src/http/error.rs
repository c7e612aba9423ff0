//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": "..."}` JSON responses with
//! appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Request body is not valid JSON for the endpoint (400)
    InvalidJson { reason: String },

    /// Query string cannot be decoded (400)
    InvalidQuery { reason: String },

    /// Record or route not found (404)
    NotFound { message: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidJson { .. } | Self::InvalidQuery { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(e) => {
                tracing::warn!("Validation failed: {}", e);
                e.to_string()
            }
            Self::InvalidJson { reason } => {
                tracing::warn!("Invalid JSON body: {}", reason);
                format!("invalid JSON: {}", reason)
            }
            Self::InvalidQuery { reason } => {
                tracing::warn!("Invalid query string: {}", reason);
                format!("invalid query: {}", reason)
            }
            Self::NotFound { message } => {
                tracing::info!("{}", message);
                message
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                "an internal error occurred".to_owned()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound {
                message: e.to_string(),
            },
            _ => Self::Database(e),
        }
    }
}
