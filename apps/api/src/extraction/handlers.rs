//! Axum route handler for resume uploads.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentKind};
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
pub const RESUME_FIELD: &str = "resumeFile";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text_content: String,
}

/// POST /api/v1/upload_resume
///
/// Extracts plain text from an uploaded `.txt`, `.pdf` or `.docx` resume.
/// The client pastes the returned text into the scan request.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let max_extracted = state.config.max_extracted_bytes;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let kind = DocumentKind::from_file_name(&file_name)?;
        let bytes: Bytes = field.bytes().await?;
        let size = bytes.len();

        let text = tokio::task::spawn_blocking(move || {
            extract_text(&file_name, &bytes, max_extracted)
        })
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

        info!(?kind, size, chars = text.chars().count(), "resume text extracted");
        return Ok(Json(UploadResponse { text_content: text }));
    }

    Err(AppError::Validation("No file part in the request".to_string()))
}
