use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use tracing::warn;

use crate::analysis::audit::AnalysisRecord;
use crate::analysis::extractor::{extract_sections, SectionReport};
use crate::analysis::prompts::{ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub job_title: String,
}

/// POST /api/v1/analyze
///
/// Asks the model for a two-section plain-text answer and returns the
/// extracted sections. A completion without recognizable structure is not
/// an error — it comes back as an empty report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<SectionReport>, AppError> {
    if req.resume.trim().is_empty() || req.job_title.trim().is_empty() {
        return Err(AppError::Validation(
            "resume and jobTitle are required".to_string(),
        ));
    }

    let prompt = ANALYZE_PROMPT_TEMPLATE
        .replace("{resume}", &req.resume)
        .replace("{job_title}", &req.job_title);

    let response = state
        .llm
        .call(&prompt, ANALYZE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("analysis failed: {e}")))?;

    let report = extract_sections(response.text().unwrap_or_default());

    let record = AnalysisRecord {
        timestamp: Utc::now(),
        job_title: req.job_title.clone(),
        resume_chars: req.resume.chars().count(),
        missing_skills: report.missing_skills.len(),
        recommended_courses: report.recommended_courses.len(),
    };
    // Audit logging is best-effort; a full disk must not fail the request.
    if let Err(e) = state.audit.record(&record) {
        warn!("failed to append analysis log: {e:#}");
    }

    Ok(Json(report))
}
