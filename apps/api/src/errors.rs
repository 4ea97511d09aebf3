use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::resume::pdf::PdfError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    #[error("Job source error: {0}")]
    JobSource(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Pdf(e) => {
                tracing::warn!("PDF extraction failed: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    "PDF_ERROR",
                    "Could not read the PDF. Please ensure the file is not corrupted or encrypted."
                        .to_string(),
                )
            }
            AppError::JobSource(msg) => {
                tracing::error!("Job source error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "JOB_SOURCE_ERROR",
                    "Job listings are unavailable right now".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
