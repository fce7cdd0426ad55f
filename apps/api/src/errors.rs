use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::GenerationError;
use crate::render::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Daily quota exceeded ({current}/{max})")]
    QuotaExceeded { current: u32, max: u32 },

    #[error("Image generation error: {0}")]
    ImageGeneration(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Extract(e) => AppError::Parse(e.to_string()),
            GenerationError::Quota(e) => AppError::QuotaExceeded {
                current: e.current,
                max: e.max,
            },
            GenerationError::ImageGen(e) => AppError::ImageGeneration(e.to_string()),
            GenerationError::Storage(e) => AppError::Storage(e.to_string()),
            // A label pointing at a missing star means the template and the
            // technology mapping disagree.
            GenerationError::Render(e @ RenderError::Placement(_)) => {
                AppError::Configuration(e.to_string())
            }
            GenerationError::Render(e) => AppError::Internal(e.into()),
            GenerationError::Internal(e) => AppError::Internal(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Parse(msg) => (StatusCode::BAD_REQUEST, "PARSE_ERROR", msg.clone()),
            AppError::QuotaExceeded { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                "QUOTA_EXCEEDED",
                format!("{self}. Try again tomorrow."),
            ),
            AppError::ImageGeneration(msg) => {
                tracing::error!("Image generation error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "IMAGE_GENERATION_ERROR",
                    "The image generation service failed".to_string(),
                )
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    "The service is misconfigured".to_string(),
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
