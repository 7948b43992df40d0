use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::pdf::PdfError;
use crate::latex::compile::CompileError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Error bodies are `{ "error": <code>, "message": <text> }`, the shape the
/// frontend already parses for inline error display.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("PDF processing error: {0}")]
    Pdf(#[from] PdfError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("LaTeX compilation error: {0}")]
    Compile(#[from] CompileError),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NotFound", msg.clone()),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "ValidationError", msg.clone())
            }
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PayloadTooLarge",
                "File size exceeds 16MB limit".to_string(),
            ),
            AppError::Pdf(e) => (
                StatusCode::BAD_REQUEST,
                "PDFProcessingError",
                e.to_string(),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AIServiceError",
                    e.user_message(),
                )
            }
            AppError::Compile(e) => match e {
                CompileError::Unavailable => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LaTeXServiceUnavailable",
                    e.to_string(),
                ),
                _ => (
                    StatusCode::BAD_REQUEST,
                    "Compilation failed",
                    e.to_string(),
                ),
            },
            AppError::Multipart(e) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                format!("Invalid multipart request: {e}"),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}
