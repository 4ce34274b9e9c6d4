// All LLM prompt constants for the free-text analysis flow.

/// System prompt for the two-section analysis. The exact section labels
/// matter: the extractor anchors on them.
pub const ANALYZE_SYSTEM: &str = "You are a career advisor. \
    Compare a candidate resume against a target job title. \
    Respond in plain text with exactly two sections: \
    a line reading 'Missing Skills:' followed by one skill per line, \
    then a line reading 'Recommended Courses:' followed by one course per line. \
    Do NOT add any other sections or commentary.";

/// Analysis prompt template. Replace `{resume}` and `{job_title}` before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = "Given the resume:\n{resume}\n\
    and the target job title: {job_title}, \
    list some missing skills and some recommended courses. \
    Format:\nMissing Skills:\nRecommended Courses:";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::{MISSING_SKILLS_LABEL, RECOMMENDED_COURSES_LABEL};

    #[test]
    fn test_template_carries_both_placeholders() {
        assert!(ANALYZE_PROMPT_TEMPLATE.contains("{resume}"));
        assert!(ANALYZE_PROMPT_TEMPLATE.contains("{job_title}"));
    }

    /// The prompts must request exactly the labels the extractor scans for.
    #[test]
    fn test_prompts_use_the_extractor_labels() {
        assert!(ANALYZE_PROMPT_TEMPLATE.contains(MISSING_SKILLS_LABEL));
        assert!(ANALYZE_PROMPT_TEMPLATE.contains(RECOMMENDED_COURSES_LABEL));
        assert!(ANALYZE_SYSTEM.contains(MISSING_SKILLS_LABEL));
        assert!(ANALYZE_SYSTEM.contains(RECOMMENDED_COURSES_LABEL));
    }
}
