//! Upload workflow — one linear pipeline with four observable stages.
//! Stages run strictly in order; the first fatal error ends the run.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analyze::analyzer::ResumeAnalyzer;
use crate::errors::AppError;
use crate::extract::preview::render_preview;
use crate::extract::text::{extract_resume_text, non_whitespace_len};
use crate::models::record::ResumeRecord;
use crate::store::RecordStore;

/// Non-whitespace character floor below which a PDF is treated as scanned.
pub const MIN_TEXT_CHARS: usize = 200;

/// The four observable stages of an upload run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Extract,
    Preview,
    Analyze,
    Done,
}

impl UploadStage {
    /// 1-based step counter for progress display.
    pub fn step(self) -> u8 {
        match self {
            UploadStage::Extract => 1,
            UploadStage::Preview => 2,
            UploadStage::Analyze => 3,
            UploadStage::Done => 4,
        }
    }

    pub fn status_text(self) -> &'static str {
        match self {
            UploadStage::Extract => "Extracting text from your resume...",
            UploadStage::Preview => "Generating preview image...",
            UploadStage::Analyze => "Analyzing with AI...",
            UploadStage::Done => "Analysis complete!",
        }
    }
}

/// Input to an upload run, as collected from the multipart form.
pub struct UploadJob {
    pub company_name: String,
    pub job_title: String,
    pub job_description: String,
    pub file_name: String,
    pub bytes: bytes::Bytes,
}

/// Outcome of a completed run: the record id and where to find it.
#[derive(Debug)]
pub struct UploadOutcome {
    pub id: Uuid,
    pub location: String,
    pub status: &'static str,
    pub step: u8,
}

/// Drives extract → preview → pending record → analyze → update.
pub async fn run_upload(
    store: &Arc<dyn RecordStore>,
    analyzer: &Arc<dyn ResumeAnalyzer>,
    job: UploadJob,
) -> Result<UploadOutcome, AppError> {
    let resume_text = extract_stage(&job.bytes)?;
    let preview_image = preview_stage(&job.bytes);
    analyze_stage(store, analyzer, job, resume_text, preview_image).await
}

/// Stage 1 — text extraction. The only fatal extraction path: an
/// undecodable, empty, or near-empty document aborts the run.
fn extract_stage(bytes: &[u8]) -> Result<String, AppError> {
    info!(
        step = UploadStage::Extract.step(),
        "{}",
        UploadStage::Extract.status_text()
    );

    let resume_text = extract_resume_text(bytes).map_err(|e| {
        AppError::Extraction(format!(
            "Could not extract text from PDF. Try a text-based PDF. ({e:#})"
        ))
    })?;
    validate_extracted_text(&resume_text)?;
    Ok(resume_text)
}

/// Scanned-PDF heuristic: empty or near-empty text is fatal.
fn validate_extracted_text(text: &str) -> Result<(), AppError> {
    if text.is_empty() {
        return Err(AppError::Extraction(
            "Could not extract text from PDF. Try a text-based PDF.".to_string(),
        ));
    }
    if non_whitespace_len(text) < MIN_TEXT_CHARS {
        return Err(AppError::Extraction(
            "This looks like a scanned PDF with no selectable text. Upload a text-based PDF."
                .to_string(),
        ));
    }
    Ok(())
}

/// Stage 2 — preview render. Non-fatal: a failure degrades to no preview.
fn preview_stage(bytes: &[u8]) -> Option<String> {
    info!(
        step = UploadStage::Preview.step(),
        "{}",
        UploadStage::Preview.status_text()
    );

    let preview = render_preview(bytes);
    if let Some(err) = preview.error {
        warn!("continuing without a preview: {err}");
        return None;
    }
    preview
        .jpeg
        .map(|jpeg| format!("data:image/jpeg;base64,{}", BASE64.encode(jpeg)))
}

/// Stages 3 and 4 — the pending record is persisted BEFORE the provider
/// call, so it exists even if analysis fails; on success the record is
/// re-read and updated in place with feedback attached.
async fn analyze_stage(
    store: &Arc<dyn RecordStore>,
    analyzer: &Arc<dyn ResumeAnalyzer>,
    job: UploadJob,
    resume_text: String,
    preview_image: Option<String>,
) -> Result<UploadOutcome, AppError> {
    info!(
        step = UploadStage::Analyze.step(),
        "{}",
        UploadStage::Analyze.status_text()
    );

    let id = Uuid::new_v4();
    store
        .upsert(ResumeRecord {
            id,
            company_name: job.company_name,
            job_title: job.job_title.clone(),
            job_description: job.job_description.clone(),
            file_name: job.file_name,
            created_at: Utc::now(),
            resume_text: resume_text.clone(),
            preview_image,
            feedback: None,
        })
        .await?;

    let feedback = analyzer
        .analyze(&resume_text, &job.job_title, &job.job_description)
        .await?;

    // Re-read rather than rebuild: the record may have been removed while
    // the provider call was in flight.
    if let Some(existing) = store.get(id).await? {
        store
            .upsert(ResumeRecord {
                feedback: Some(feedback),
                ..existing
            })
            .await?;
    }

    info!(
        step = UploadStage::Done.step(),
        "{}",
        UploadStage::Done.status_text()
    );
    Ok(UploadOutcome {
        id,
        location: format!("/resume/{id}"),
        status: UploadStage::Done.status_text(),
        step: UploadStage::Done.step(),
    })
}
