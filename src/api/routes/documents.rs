use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::path::Path;

use crate::api::routes::error_status;
use crate::api::state::AppState;

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub chunks_stored: usize,
}

/// Accepts one uploaded file, extracts its text through the reader port and
/// indexes it. Unsupported extensions map to 415, empty extracted text to 422.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<IngestResponse>, StatusCode> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let extension = Path::new(&filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();

        let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;

        let text = state.reader.read(&bytes, &extension).map_err(|e| {
            tracing::warn!(error = %e, filename = %filename, "rejected upload");
            error_status(&e)
        })?;

        let chunks_stored = state.ingest_service.ingest(&text).await.map_err(|e| {
            tracing::error!(error = %e, filename = %filename, "ingest failed");
            error_status(&e)
        })?;

        return Ok(Json(IngestResponse { chunks_stored }));
    }

    Err(StatusCode::BAD_REQUEST)
}
