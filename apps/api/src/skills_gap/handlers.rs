use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::skills_gap::models::SkillsGapReport;
use crate::skills_gap::prompts::{SKILLS_GAP_PROMPT_TEMPLATE, SKILLS_GAP_SYSTEM};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillsGapRequest {
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub job: String,
}

/// POST /api/v1/skills-gap
pub async fn handle_skills_gap(
    State(state): State<AppState>,
    Json(req): Json<SkillsGapRequest>,
) -> Result<Json<SkillsGapReport>, AppError> {
    if req.resume.trim().is_empty() || req.job.trim().is_empty() {
        return Err(AppError::Validation("resume and job are required".to_string()));
    }

    let prompt = SKILLS_GAP_PROMPT_TEMPLATE
        .replace("{resume}", &req.resume)
        .replace("{job}", &req.job);

    // An empty completion is a sparse report, not a failure.
    let report = match state
        .llm
        .call_json::<SkillsGapReport>(&prompt, SKILLS_GAP_SYSTEM)
        .await
    {
        Ok(report) => report,
        Err(LlmError::EmptyContent) => SkillsGapReport::default(),
        Err(e) => return Err(AppError::Llm(format!("skills-gap analysis failed: {e}"))),
    };

    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_missing_fields_default_to_empty() {
        let req: SkillsGapRequest = serde_json::from_str("{}").unwrap();
        assert!(req.resume.is_empty());
        assert!(req.job.is_empty());
    }
}
