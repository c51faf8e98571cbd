// Shared test helpers for building analysis results.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use newsletter_report::links::ProbeOutcome;
use newsletter_report::models::{AiOutcome, AnalysisResult, HtmlIssue, LinkRecord};
use newsletter_report::report::compose_result;

/// Fixed analysis timestamp used by deterministic tests (2024-05-01T09:00:00Z).
#[allow(dead_code)] // Used by other test files
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

/// Creates resolved links from status codes, one URL per code.
#[allow(dead_code)] // Used by other test files
pub fn links_with_codes(codes: &[u16]) -> Vec<LinkRecord> {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| {
            LinkRecord::from_probe(
                Some(format!("Link {i}")),
                &ProbeOutcome::from_status(format!("https://example.com/page-{i}"), *code),
            )
        })
        .collect()
}

/// Creates `count` distinct HTML issues.
#[allow(dead_code)] // Used by other test files
pub fn html_issues(count: usize) -> Vec<HtmlIssue> {
    (0..count)
        .map(|i| HtmlIssue::new(format!("HTML issue {i}")))
        .collect()
}

/// AI payload with the five scored sub-evaluations.
#[allow(dead_code)] // Used by other test files
pub fn ai_payload(scores: [f64; 5]) -> Value {
    json!({
        "spelling_grammar": {"score": scores[0], "errors": ["recieve"], "suggestions": ["Proofread the intro"]},
        "readability": {"score": scores[1], "level": "medium", "suggestions": ["Shorten long sentences"]},
        "cta_evaluation": {"effectiveness": scores[2], "detected_ctas": ["Shop now"], "suggestions": []},
        "subject_preheader": {"subject_score": scores[3], "preheader_score": 6, "suggestions": ["Add urgency"]},
        "structure": {"score": scores[4], "problems": ["Footer is too long"]}
    })
}

/// Composes a result with the fixed timestamp.
#[allow(dead_code)] // Used by other test files
pub fn result_with(
    link_codes: &[u16],
    issue_count: usize,
    ai: Option<Value>,
) -> AnalysisResult {
    compose_result(
        links_with_codes(link_codes),
        html_issues(issue_count),
        ai.map(AiOutcome::from_value),
        fixed_timestamp(),
    )
}
