//! Upload route handler.

use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::response::ApiResponse;
use crate::state::AppState;

/// The hosted location of an uploaded file.
#[derive(Debug, Serialize)]
pub struct UploadedFile {
    pub url: String,
}

/// Accept a multipart file and forward it to the media host.
///
/// Expects a `file` part; answers 400 without one and 502 when the media
/// host misbehaves.
#[instrument(skip(state, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadedFile>>> {
    let Some(media) = state.media() else {
        return Err(AppError::Internal("media host not configured".to_owned()));
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload.bin").to_owned();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read file: {e}")))?;

        tracing::debug!(file_name, size = bytes.len(), "forwarding upload to media host");
        let url = media.upload(&file_name, &content_type, bytes.to_vec()).await?;

        return Ok(Json(ApiResponse::ok(UploadedFile { url })));
    }

    Err(AppError::BadRequest("No file uploaded".to_owned()))
}
