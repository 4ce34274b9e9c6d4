// All LLM prompt constants for the skills-gap flow.

/// System prompt — pins the report schema and enforces JSON-only output.
pub const SKILLS_GAP_SYSTEM: &str = r#"You analyze a candidate resume against a job description and return ONLY JSON.
You MUST respond with valid JSON only. Do NOT include any text outside the JSON object. Do NOT use markdown code fences. Do NOT include explanations or apologies.

Return a JSON object with this EXACT schema (no extra fields):
{
  "candidate_core_skills": string[],
  "job_required_skills": string[],
  "skills_matched": string[],
  "skills_missing": string[],
  "priority_learning_plan": [
    { "skill": string, "why": string, "starter_resources": string[] }
  ],
  "notes": string
}"#;

/// User prompt template. Replace `{resume}` and `{job}` before sending.
pub const SKILLS_GAP_PROMPT_TEMPLATE: &str = "[RESUME]\n{resume}\n\n[JOB_DESCRIPTION]\n{job}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_carries_both_placeholders() {
        assert!(SKILLS_GAP_PROMPT_TEMPLATE.contains("{resume}"));
        assert!(SKILLS_GAP_PROMPT_TEMPLATE.contains("{job}"));
    }

    /// Field names in the schema prompt must match the wire types exactly,
    /// or the model's answer will deserialize to defaults.
    #[test]
    fn test_schema_prompt_names_every_report_field() {
        for field in [
            "candidate_core_skills",
            "job_required_skills",
            "skills_matched",
            "skills_missing",
            "priority_learning_plan",
            "starter_resources",
            "notes",
        ] {
            assert!(SKILLS_GAP_SYSTEM.contains(field), "schema is missing {field}");
        }
    }
}
