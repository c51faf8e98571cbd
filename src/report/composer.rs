//! Report composition.
//!
//! Composition is pure and total: every list is present (possibly empty) and
//! the partition into critical issues and warnings is decided here only.

use chrono::{DateTime, Utc};

use crate::models::{
    AiOutcome, AnalysisResult, HtmlIssue, LinkRecord, LinkStatus, RawAnalysis, Report,
};

/// Builds the canonical report from classified links and HTML issues.
///
/// - Every `Error` link becomes one critical issue.
/// - Every `Warning` link and every HTML issue becomes one warning.
/// - `Pending` and `Success` links only count toward `total_links`.
pub fn compose_report(
    links: &[LinkRecord],
    html_issues: &[HtmlIssue],
    analysis_timestamp: DateTime<Utc>,
) -> Report {
    let mut critical_issues = Vec::new();
    let mut link_warnings = Vec::new();

    for link in links {
        match link.status() {
            LinkStatus::Error => critical_issues.push(broken_link_message(link)),
            LinkStatus::Warning => link_warnings.push(attention_link_message(link)),
            LinkStatus::Success | LinkStatus::Pending => {}
        }
    }

    let broken_links = critical_issues.len();
    let mut warnings = link_warnings;
    warnings.extend(html_issues.iter().map(|issue| issue.as_str().to_string()));

    log::debug!(
        "Composed report: {} links, {} broken, {} critical issues, {} warnings",
        links.len(),
        broken_links,
        critical_issues.len(),
        warnings.len()
    );

    Report {
        total_links: links.len(),
        broken_links,
        critical_issues,
        warnings,
        analysis_timestamp,
    }
}

/// Builds the full analysis result around a freshly composed report.
pub fn compose_result(
    links: Vec<LinkRecord>,
    html_issues: Vec<HtmlIssue>,
    ai_analysis: Option<AiOutcome>,
    analysis_timestamp: DateTime<Utc>,
) -> AnalysisResult {
    if let Some(AiOutcome::Unavailable { reason }) = &ai_analysis {
        log::warn!("AI analysis unavailable: {reason}");
    }
    let report = compose_report(&links, &html_issues, analysis_timestamp);
    AnalysisResult::new(links, html_issues, ai_analysis, report)
}

/// Classifies a backend response and composes the result.
///
/// The response's own report (if any) is ignored.
pub fn compose_from_raw(raw: RawAnalysis, analysis_timestamp: DateTime<Utc>) -> AnalysisResult {
    let links: Vec<LinkRecord> = raw.links.into_iter().map(|l| l.into_record()).collect();
    let ai = raw.ai_analysis.map(AiOutcome::from_value);
    compose_result(links, raw.html_issues, ai, analysis_timestamp)
}

fn broken_link_message(link: &LinkRecord) -> String {
    match (link.status_code(), link.failure_reason()) {
        (Some(code), _) => format!("Broken link {} (HTTP {})", link.url, code),
        (None, Some(reason)) => format!("Broken link {} ({})", link.url, reason),
        (None, None) => format!("Broken link {} (unreachable)", link.url),
    }
}

fn attention_link_message(link: &LinkRecord) -> String {
    match link.status_code() {
        Some(code) => format!("Link needs attention {} (HTTP {})", link.url, code),
        None => format!("Link needs attention {} (no status code)", link.url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::ProbeOutcome;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn link(url: &str, code: u16) -> LinkRecord {
        LinkRecord::from_probe(None, &ProbeOutcome::from_status(url, code))
    }

    #[test]
    fn test_empty_inputs_yield_empty_lists() {
        let report = compose_report(&[], &[], ts());
        assert_eq!(report.total_links, 0);
        assert_eq!(report.broken_links, 0);
        assert!(report.critical_issues.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(report.analysis_timestamp, ts());
    }

    #[test]
    fn test_partition() {
        let links = vec![
            link("https://ok.example", 200),
            link("https://gone.example", 404),
            link("https://odd.example", 150),
            LinkRecord::from_probe(
                None,
                &ProbeOutcome::from_error("https://down.example", "connection refused"),
            ),
            LinkRecord::pending("https://later.example", None),
        ];
        let issues = vec![HtmlIssue::new("Image without alt text")];
        let report = compose_report(&links, &issues, ts());

        assert_eq!(report.total_links, 5);
        assert_eq!(report.broken_links, 2);
        assert_eq!(
            report.critical_issues,
            vec![
                "Broken link https://gone.example (HTTP 404)".to_string(),
                "Broken link https://down.example (connection refused)".to_string(),
            ]
        );
        assert_eq!(
            report.warnings,
            vec![
                "Link needs attention https://odd.example (HTTP 150)".to_string(),
                "Image without alt text".to_string(),
            ]
        );
    }

    #[test]
    fn test_html_issues_are_never_critical() {
        let issues = vec![HtmlIssue::new("Missing doctype"), HtmlIssue::new("Nested tables")];
        let report = compose_report(&[], &issues, ts());
        assert!(report.critical_issues.is_empty());
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_compose_from_raw_recomputes_partition() {
        let raw: RawAnalysis = serde_json::from_value(serde_json::json!({
            "links": [
                {"url": "https://gone.example", "status": "warning", "status_code": 404},
                {"url": "https://ok.example", "status": "success", "status_code": 200}
            ],
            "html_issues": [],
            "ai_analysis": {"error": "No API key"},
            "report": {"total_links": 99, "broken_links": 0, "critical_issues": [], "warnings": []}
        }))
        .unwrap();
        let result = compose_from_raw(raw, ts());
        assert_eq!(result.report().total_links, 2);
        assert_eq!(result.report().broken_links, 1);
        assert!(result.ai_analysis().is_none());
        assert!(matches!(
            result.ai_outcome(),
            Some(AiOutcome::Unavailable { .. })
        ));
    }
}
