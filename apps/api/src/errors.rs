use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Llm(e @ LlmError::Api { .. }) => {
                tracing::error!("Upstream rejected chat request: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Llm(e) if e.is_timeout() => {
                tracing::error!("Groq API request timed out: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Llm(e) => {
                tracing::error!("Error calling Groq API: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
