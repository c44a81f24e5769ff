use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::feedback::Feedback;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub ok: bool,
    pub feedback: Feedback,
}

/// POST /api/analyze
///
/// The body is taken as loose JSON so missing or mistyped fields produce the
/// field-naming 400 instead of a generic deserialization rejection.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let resume_text = require_string(&body, "resumeText")?;
    let job_title = require_string(&body, "jobTitle")?;
    let job_description = require_string(&body, "jobDescription")?;

    let feedback = state
        .analyzer
        .analyze(resume_text, job_title, job_description)
        .await?;

    Ok(Json(AnalyzeResponse { ok: true, feedback }))
}

/// Any non-POST method on /api/analyze.
pub async fn handle_analyze_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Rejects with a field-naming 400 unless `field` is a non-empty string.
fn require_string<'a>(body: &'a Value, field: &str) -> Result<&'a str, AppError> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation(format!("Missing or invalid {field}")))
}
