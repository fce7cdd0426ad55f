//! Axum route handlers for the generation API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::generation::ConstellationResult;
use crate::quota::QuotaStatus;
use crate::state::AppState;

/// Multipart field carrying the résumé.
pub const FILE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-constellation
///
/// Accepts a PDF or DOCX résumé in the `file` multipart field and returns the
/// uploaded image URL with the analysis that produced it.
pub async fn handle_generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ConstellationResult>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            debug!("Ignoring multipart field {:?}", field.name());
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded file has no filename".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        let result = state.orchestrator.generate(bytes, filename).await?;
        return Ok(Json(result));
    }

    Err(AppError::Validation(format!(
        "Missing '{FILE_FIELD}' field in multipart body"
    )))
}

/// GET /api/quota
pub async fn handle_quota(State(state): State<AppState>) -> Json<QuotaStatus> {
    Json(state.quota.status())
}
