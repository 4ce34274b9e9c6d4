//! Section extractor — pulls the labeled "Missing Skills" and "Recommended
//! Courses" blocks out of free-form model output.
//!
//! Models routinely echo the requested format before producing their real
//! answer, so a label can appear more than once; the final occurrence is
//! taken as the actual answer. Labels are located with an explicit
//! case-insensitive scan and the text between them is sliced directly —
//! no backtracking regex lookahead, so "last occurrence wins" is an
//! auditable step and adversarial input cannot blow up matching.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MISSING_SKILLS_LABEL: &str = "Missing Skills:";
pub const RECOMMENDED_COURSES_LABEL: &str = "Recommended Courses:";

/// Scaffolding lines with no real content: an optional list marker, an
/// optional bare `Skill`/`Course`, optional digits, an optional `:` or `-`.
/// Accepted limitation: a genuine entry that is literally just "Skill:" is
/// dropped too.
static NOISE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[-*]?\s*(?:skill|course)?\s*\d*[:\-]?\s*$").unwrap());

/// A section label leaking into the content of a malformed blob.
static LABEL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:missing skills|recommended courses):?$").unwrap());

/// Leading list decoration: `-` or `*`, optionally followed by an ordinal
/// like `2. `.
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]?\s*(?:\d+\.\s*)?").unwrap());

/// Structured result of a section extraction. The raw-text fields keep the
/// model's original formatting for display and audit; the lists are
/// cleaned, marker-stripped, and de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionReport {
    pub missing_skills: Vec<String>,
    pub recommended_courses: Vec<String>,
    pub missing_skills_raw_text: String,
    pub recommended_courses_raw_text: String,
}

/// Extracts both labeled sections from raw model output.
///
/// Never fails: empty or unrecognizable input degrades to empty lists and
/// empty raw blocks. There is no input length cap.
pub fn extract_sections(raw_text: &str) -> SectionReport {
    if raw_text.is_empty() {
        return SectionReport::default();
    }

    // Drop any preamble (restated prompt, pleasantries) before the first
    // canonical label. The anchor is case-sensitive; section extraction
    // below is not, so an all-lowercase answer still extracts — it just
    // keeps its preamble.
    let text = match raw_text.find(MISSING_SKILLS_LABEL) {
        Some(at) => &raw_text[at..],
        None => raw_text,
    };

    let missing_block = missing_skills_block(text);
    let courses_block = recommended_courses_block(text);

    SectionReport {
        missing_skills: dedup(clean_section(missing_block)),
        recommended_courses: dedup(clean_section(courses_block)),
        missing_skills_raw_text: format!("{MISSING_SKILLS_LABEL}\n{missing_block}"),
        recommended_courses_raw_text: format!("{RECOMMENDED_COURSES_LABEL}\n{courses_block}"),
    }
}

/// Content of the last `Missing Skills:` section: everything after the
/// label, up to the next `\nRecommended Courses:` or end of input.
fn missing_skills_block(text: &str) -> &str {
    let Some(tail) = tail_after_last_label(text, MISSING_SKILLS_LABEL) else {
        return "";
    };
    let tail = tail.trim_start();
    let end = find_ci(tail, "\nRecommended Courses:").unwrap_or(tail.len());
    tail[..end].trim_end()
}

/// Content of the last `Recommended Courses:` section: everything after
/// the label, up to the next line that begins with an ASCII uppercase
/// letter, or end of input.
fn recommended_courses_block(text: &str) -> &str {
    let Some(tail) = tail_after_last_label(text, RECOMMENDED_COURSES_LABEL) else {
        return "";
    };
    let tail = tail.trim_start();
    let end = capitalized_line_start(tail).unwrap_or(tail.len());
    tail[..end].trim_end()
}

/// The text following the last case-insensitive occurrence of `label`, or
/// `None` when the label never appears.
fn tail_after_last_label<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    let at = *label_offsets(text, label).last()?;
    Some(&text[at + label.len()..])
}

/// Byte offsets of every case-insensitive occurrence of `label`.
fn label_offsets(text: &str, label: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut from = 0;
    while let Some(at) = find_ci_from(text.as_bytes(), label.as_bytes(), from) {
        offsets.push(at);
        from = at + 1;
    }
    offsets
}

/// First case-insensitive occurrence of `needle` in `haystack`.
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    find_ci_from(haystack.as_bytes(), needle.as_bytes(), 0)
}

fn find_ci_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// Offset of the first newline followed by an ASCII uppercase letter —
/// the boundary where the next prose paragraph or section starts.
fn capitalized_line_start(text: &str) -> Option<usize> {
    text.as_bytes()
        .windows(2)
        .position(|w| w[0] == b'\n' && w[1].is_ascii_uppercase())
}

/// Line-level cleanup of a captured block: trim, drop empty and
/// scaffolding-only lines, drop leaked label lines, strip one leading list
/// marker from each survivor. Lines reduced to nothing are dropped.
fn clean_section(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !NOISE_LINE.is_match(line))
        .filter(|line| !LABEL_LINE.is_match(line))
        .map(|line| LIST_MARKER.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Collapses duplicates while preserving first-seen order.
fn dedup(lines: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    lines.into_iter().filter(|line| seen.insert(line.clone())).collect()
}
