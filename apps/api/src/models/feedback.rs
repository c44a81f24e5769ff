//! The feedback scorecard — the one typed shape external analysis data is
//! parsed into. Defaults are filled here, at the boundary where provider
//! output enters the system, so downstream consumers never null-check.

use serde::{Deserialize, Serialize};

/// Tip polarity used across all five categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    Good,
    #[default]
    Improve,
}

/// One observation inside a category block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    #[serde(rename = "type", default)]
    pub kind: TipKind,
    #[serde(default)]
    pub tip: String,
    /// Longer rationale. The provider omits it for ATS tips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Score plus ordered tips for one review dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryFeedback {
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub tips: Vec<Tip>,
}

/// The full scorecard returned by the analysis provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feedback {
    pub overall_score: u32,
    #[serde(rename = "ATS")]
    pub ats: CategoryFeedback,
    pub tone_and_style: CategoryFeedback,
    pub content: CategoryFeedback,
    pub structure: CategoryFeedback,
    pub skills: CategoryFeedback,
}
