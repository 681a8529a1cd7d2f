use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// All errors are terminal for the request; there is no retry or fallback.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Gemini model not initialized")]
    ModelUnavailable,

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ModelUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Gemini model not initialized. Check backend logs.".to_string(),
            ),
            // The descriptive "Error..." text is part of the API contract
            // and is surfaced to the caller verbatim.
            AppError::Generation(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to build the Word document".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
