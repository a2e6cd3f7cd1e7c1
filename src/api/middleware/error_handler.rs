//! Conversion of `AppError` into HTTP responses.
//!
//! Bodies are always `{"errors": ...}`: a list of per-field messages for
//! validation failures, a single message otherwise. Server-side failures
//! are logged here and sanitized before leaving the process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::{AppError, ValidationFieldError};

impl IntoResponse for AppError {
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - Validation, ValidationErrors, BadRequest → 400 BAD_REQUEST
    /// - Database, Configuration, Internal → 500 INTERNAL_SERVER_ERROR
    /// - ConnectionPool → 503 SERVICE_UNAVAILABLE
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        if status.is_server_error() {
            tracing::error!(error = ?self, status = status.as_u16(), "Request failed");
        }

        let body = match &self {
            AppError::ValidationErrors { errors } => {
                ErrorResponse::messages(errors.iter().map(ValidationFieldError::message).collect())
            }
            AppError::Validation { field, reason } => ErrorResponse::messages(vec![
                ValidationFieldError::new(field.as_str(), reason.as_str()).message(),
            ]),
            AppError::BadRequest { message } => ErrorResponse::message(message.as_str()),
            AppError::NotFound { .. } => ErrorResponse::message(self.to_string()),
            AppError::Database { operation, .. } => {
                ErrorResponse::message(format!("Database operation failed: {}", operation))
            }
            AppError::ConnectionPool { .. } => {
                ErrorResponse::message("Database connection unavailable")
            }
            AppError::Configuration { .. } | AppError::Internal { .. } => {
                ErrorResponse::message("An internal error occurred")
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Validation { .. }
        | AppError::ValidationErrors { .. }
        | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
