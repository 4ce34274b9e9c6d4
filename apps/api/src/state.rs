use std::sync::Arc;

use crate::analysis::audit::AnalysisLog;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Append-only CSV log of completed analyses.
    pub audit: Arc<AnalysisLog>,
}
