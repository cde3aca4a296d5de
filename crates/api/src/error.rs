use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sayyes_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors. Implements [`IntoResponse`] to
/// produce consistent JSON error responses. The chat endpoint never returns
/// one of these; its faults degrade to friendly text instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sayyes_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request could not be decoded, e.g. a malformed query string.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::UnknownCategory(name)) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Catalog category '{name}' not found"),
            ),
            AppError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", reason.clone())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
