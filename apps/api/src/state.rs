use std::sync::Arc;

use crate::analyze::analyzer::ResumeAnalyzer;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Record persistence port. File-backed in production, in-memory in tests.
    pub store: Arc<dyn RecordStore>,
    /// Analysis port. Provider-backed in production, stubbed in tests.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
