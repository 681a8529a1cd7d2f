//! Axum route handlers for the MCQ API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::mcq::export::{build_mcq_document, pack_document, DOCX_MIME};
use crate::mcq::filename::download_filename;
use crate::mcq::generator::{is_generation_error, McqGenerator};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMcqsRequest {
    #[serde(default)]
    pub topic_name: String,
    #[serde(default)]
    pub chapter_content: String,
    #[serde(default)]
    pub pyqs: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateMcqsResponse {
    pub mcqs: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportWordRequest {
    #[serde(default)]
    pub mcqs: String,
    #[serde(default)]
    pub topic_name: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-mcqs
///
/// Builds the prompt, makes one Gemini call, and returns the raw MCQ text.
/// The text is never parsed into structured questions; it travels opaquely
/// to the export endpoint.
pub async fn handle_generate_mcqs(
    State(state): State<AppState>,
    Json(request): Json<GenerateMcqsRequest>,
) -> Result<Json<GenerateMcqsResponse>, AppError> {
    if request.topic_name.is_empty() {
        return Err(AppError::Validation("Topic name is required".to_string()));
    }

    let llm = state.llm.as_ref().ok_or(AppError::ModelUnavailable)?;

    info!("Generating MCQs for topic '{}'", request.topic_name);

    // Upstream failures surface typed from the generator. The substring check
    // below only re-classifies model-returned text (preserved quirk).
    let mcqs = llm
        .generate(
            &request.topic_name,
            &request.chapter_content,
            &request.pyqs,
        )
        .await?;

    if is_generation_error(&mcqs) {
        return Err(AppError::Generation(mcqs));
    }

    Ok(Json(GenerateMcqsResponse { mcqs }))
}

/// POST /api/export-word
///
/// Transcribes the MCQ text into a .docx and returns it as an attachment
/// download. Missing or empty `mcqs` degrades to a heading-only document
/// rather than failing.
pub async fn handle_export_word(
    Json(request): Json<ExportWordRequest>,
) -> Result<Response, AppError> {
    let topic = request.topic_name.trim();

    let docx = build_mcq_document(topic, &request.mcqs);
    let bytes = pack_document(docx).map_err(|e| AppError::Export(e.to_string()))?;
    let filename = download_filename(topic);

    info!("Exported {} bytes as '{}'", bytes.len(), filename);

    let headers = [
        (header::CONTENT_TYPE, DOCX_MIME.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, bytes).into_response())
}
