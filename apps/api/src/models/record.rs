use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::feedback::Feedback;

/// One stored resume-analysis entry.
///
/// Created in a pending state (no feedback) the moment text extraction
/// succeeds; updated in place exactly once when analysis completes; only
/// removed by explicit user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub id: Uuid,
    pub company_name: String,
    pub job_title: String,
    pub job_description: String,
    /// Original upload file name.
    pub file_name: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Extracted plain text; immutable after creation.
    pub resume_text: String,
    /// First-page render as a `data:image/jpeg;base64,...` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ResumeRecord {
        ResumeRecord {
            id: Uuid::new_v4(),
            company_name: "Acme".to_string(),
            job_title: "Backend Engineer".to_string(),
            job_description: "Build services".to_string(),
            file_name: "resume.pdf".to_string(),
            created_at: Utc::now(),
            resume_text: "Experienced engineer".to_string(),
            preview_image: None,
            feedback: None,
        }
    }

    #[test]
    fn test_created_at_serializes_as_integer_millis() {
        let record = sample_record();
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["createdAt"].is_i64());
        assert_eq!(
            value["createdAt"].as_i64().unwrap(),
            record.created_at.timestamp_millis()
        );
    }

    #[test]
    fn test_pending_record_omits_optional_fields() {
        let value = serde_json::to_value(sample_record()).unwrap();
        assert!(value.get("feedback").is_none());
        assert!(value.get("previewImage").is_none());
        assert_eq!(value["jobTitle"], "Backend Engineer");
        assert_eq!(value["fileName"], "resume.pdf");
    }

    #[test]
    fn test_record_roundtrip_is_deep_equal() {
        let mut record = sample_record();
        // ts_milliseconds truncates sub-millisecond precision; normalize first
        record.created_at =
            DateTime::from_timestamp_millis(record.created_at.timestamp_millis()).unwrap();
        record.preview_image = Some("data:image/jpeg;base64,AAAA".to_string());

        let json = serde_json::to_string(&record).unwrap();
        let back: ResumeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
