//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use censudex_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Newtype over [`AppError`] so handlers can return it from this crate.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        // All auth failures collapse to a single 401 code so the response
        // cannot be used to distinguish which check failed.
        let (status, error_code, message) = if err.is_unauthorized() {
            if err.kind == ErrorKind::DirectoryUnreachable {
                tracing::warn!(error = %err, "Login failed: directory unreachable");
            }
            (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", err.message)
        } else {
            match err.kind {
                ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.message),
                _ => {
                    tracing::error!(error = %err, "Internal server error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "Error interno del servidor.".to_string(),
                    )
                }
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
