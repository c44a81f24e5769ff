use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::orchestrator::{run_upload, UploadJob, UploadOutcome};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/upload (multipart/form-data)
///
/// Fields: `file` (the PDF), `jobTitle` (required), `companyName` and
/// `jobDescription` (optional). Any stage failure is reported with an
/// `Error: ` prefix and is terminal for this request — no automatic retry.
pub async fn handle_upload(State(state): State<AppState>, multipart: Multipart) -> Response {
    match process(state, multipart).await {
        Ok(outcome) => upload_response(outcome),
        Err(err) => {
            let status = err.status_code();
            tracing::error!("upload failed: {err}");
            (
                status,
                Json(json!({ "ok": false, "error": format!("Error: {err}") })),
            )
                .into_response()
        }
    }
}

fn upload_response(outcome: UploadOutcome) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "ok": true,
            "id": outcome.id,
            "location": outcome.location,
            "status": outcome.status,
            "step": outcome.step,
        })),
    )
        .into_response()
}

async fn process(state: AppState, mut multipart: Multipart) -> Result<UploadOutcome, AppError> {
    let mut company_name = String::new();
    let mut job_title = String::new();
    let mut job_description = String::new();
    let mut file_name = String::new();
    let mut bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        match field.name().unwrap_or_default() {
            "companyName" => company_name = read_text(field).await?,
            "jobTitle" => job_title = read_text(field).await?,
            "jobDescription" => job_description = read_text(field).await?,
            "file" => {
                file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                bytes = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read uploaded file: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let bytes =
        bytes.ok_or_else(|| AppError::Validation("Please upload a PDF resume first.".to_string()))?;
    if job_title.trim().is_empty() {
        return Err(AppError::Validation("Job title is required.".to_string()));
    }

    run_upload(
        &state.store,
        &state.analyzer,
        UploadJob {
            company_name: company_name.trim().to_string(),
            job_title: job_title.trim().to_string(),
            job_description: job_description.trim().to_string(),
            file_name,
            bytes,
        },
    )
    .await
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))
}
