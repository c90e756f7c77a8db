//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! handler fails the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use storefront_core::errors::StoreError;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps `StoreError` and implements `IntoResponse`, so handlers
/// can return `Result<_, AppError>` and use `?` on store calls.
#[derive(Debug)]
pub struct AppError(pub StoreError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::Authentication(_) => StatusCode::UNAUTHORIZED,
            StoreError::Authorization(_) => StatusCode::FORBIDDEN,
            StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self.0, "request failed");
        }

        // Validation messages are shown verbatim; the rest keep their prefix
        let message = match &self.0 {
            StoreError::Validation(message) => message.clone(),
            other => other.to_string(),
        };
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError(err)
    }
}

/// Store and repository failures arrive as `eyre::Report`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(StoreError::Database(err))
    }
}
