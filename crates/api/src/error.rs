use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use supportdesk_core::error::CoreError;
use supportdesk_db::error::StoreError;

/// Application-level error type for HTTP handlers and the service layer.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `supportdesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure from the note store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A failed background task, with a message for the logs.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::SecurityToken(msg) => (
                    StatusCode::FORBIDDEN,
                    "INVALID_SECURITY_TOKEN",
                    msg.clone(),
                ),
            },

            // --- Storage errors ---
            AppError::Store(StoreError::Database(err)) => {
                tracing::error!(error = %err, "Database error");
                persistence_error()
            }
            AppError::Store(StoreError::Backend(msg)) => {
                tracing::error!(error = %msg, "Storage backend error");
                persistence_error()
            }

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Sanitized response for any storage failure.
fn persistence_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "PERSISTENCE_ERROR",
        "The note could not be read or written".to_string(),
    )
}
