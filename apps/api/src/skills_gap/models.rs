//! Wire types for the structured skills-gap report.

use serde::{Deserialize, Serialize};

/// One step of the prioritized learning plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPlanEntry {
    pub skill: String,
    #[serde(default)]
    pub why: String,
    #[serde(default)]
    pub starter_resources: Vec<String>,
}

/// Full structured output of the skills-gap analysis.
///
/// Every field defaults: the model occasionally omits keys, and a sparse
/// report is still a valid report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsGapReport {
    #[serde(default)]
    pub candidate_core_skills: Vec<String>,
    #[serde(default)]
    pub job_required_skills: Vec<String>,
    #[serde(default)]
    pub skills_matched: Vec<String>,
    #[serde(default)]
    pub skills_missing: Vec<String>,
    #[serde(default)]
    pub priority_learning_plan: Vec<LearningPlanEntry>,
    #[serde(default)]
    pub notes: String,
}
