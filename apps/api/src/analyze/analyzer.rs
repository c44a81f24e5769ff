//! Analyzer port — swaps the provider-backed implementation for a stub in
//! tests without touching handlers or the upload flow.

use async_trait::async_trait;

use crate::analyze::prompts::build_analysis_prompt;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::feedback::Feedback;

/// Scores a resume against a target job.
///
/// Carried in `AppState` as `Arc<dyn ResumeAnalyzer>`.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_title: &str,
        job_description: &str,
    ) -> Result<Feedback, AppError>;
}

/// Provider-backed analyzer: one prompt, one completion, typed parse.
pub struct LlmAnalyzer(pub LlmClient);

#[async_trait]
impl ResumeAnalyzer for LlmAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_title: &str,
        job_description: &str,
    ) -> Result<Feedback, AppError> {
        let prompt = build_analysis_prompt(resume_text, job_title, job_description);
        let feedback = self.0.complete_json::<Feedback>(&prompt).await?;
        Ok(feedback)
    }
}
