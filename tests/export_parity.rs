//! Markdown and PDF exports render the same content.

#[path = "helpers.rs"]
mod helpers;

use helpers::{ai_payload, fixed_timestamp, html_issues, result_with};
use newsletter_report::export::{export_document, export_markdown, layout_document};
use newsletter_report::links::ProbeOutcome;
use newsletter_report::models::LinkRecord;
use newsletter_report::report::{compose_result, ReportOutline};
use serde_json::json;

/// Headings of a Markdown document (`##` and `###` levels).
fn markdown_section_labels(md: &str) -> Vec<String> {
    md.lines()
        .filter_map(|line| {
            line.strip_prefix("### ")
                .or_else(|| line.strip_prefix("## "))
                .map(str::to_string)
        })
        .collect()
}

/// Bullet items of the Markdown document that are not `**Label:** value` fields.
fn markdown_items(md: &str) -> Vec<String> {
    md.lines()
        .filter_map(|line| line.strip_prefix("- "))
        .filter(|item| !item.starts_with("**"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_markdown_is_deterministic() {
    let ai = ai_payload([8.0, 6.5, 9.0, 7.0, 5.0]);
    let first = export_markdown(&result_with(&[200, 404, 302], 3, Some(ai.clone())));
    let second = export_markdown(&result_with(&[200, 404, 302], 3, Some(ai)));
    assert_eq!(first, second);
    assert!(first.contains("**Date:** 2024-05-01"));
}

#[test]
fn test_same_sections_in_markdown_and_document() {
    let cases = vec![
        result_with(&[], 0, None),
        result_with(&[404], 0, None),
        result_with(&[200], 4, Some(json!({"error": "Invalid key"}))),
        result_with(&[200, 404, 503], 2, Some(ai_payload([8.0, 6.0, 9.0, 7.0, 5.0]))),
        result_with(&[200], 0, Some(json!({"readability": 7.5}))),
    ];
    for result in &cases {
        let md = export_markdown(result);
        let outline = ReportOutline::from_result(result);
        let layout = layout_document(&outline);

        assert_eq!(markdown_section_labels(&md), outline.section_labels());
        assert_eq!(layout.section_labels(), outline.section_labels());
        assert_eq!(markdown_items(&md), layout.items());
    }
}

#[test]
fn test_long_url_items_match_in_markdown_and_document() {
    for length in [100, 120, 400] {
        let url = format!("https://example.com/{}", "a".repeat(length));
        let link = LinkRecord::from_probe(None, &ProbeOutcome::from_status(url.clone(), 404));
        let result = compose_result(vec![link], html_issues(1), None, fixed_timestamp());

        let md = export_markdown(&result);
        let layout = layout_document(&ReportOutline::from_result(&result));
        let items = layout.items();
        assert_eq!(markdown_items(&md), items);
        assert!(items.iter().any(|item| item.contains(&url)), "{url} lost in {items:?}");
    }
}

#[test]
fn test_ai_sections_only_when_ai_succeeded() {
    let ok = ReportOutline::from_result(&result_with(&[], 0, Some(ai_payload([5.0; 5]))));
    assert_eq!(
        ok.section_labels(),
        vec![
            "Summary",
            "AI Analysis",
            "Spelling & Grammar (5/10)",
            "Readability (5/10)",
            "Call-to-Action (5/10)",
            "Subject & Preheader (5/10)",
            "Structure (5/10)",
        ]
    );

    let failed = ReportOutline::from_result(&result_with(&[], 0, Some(json!({"error": "x"}))));
    assert_eq!(failed.section_labels(), vec!["Summary"]);
}

#[test]
fn test_long_report_paginates_and_keeps_every_item() {
    let result = result_with(&[404; 60], 80, Some(ai_payload([7.0; 5])));
    let md = export_markdown(&result);
    let layout = layout_document(&ReportOutline::from_result(&result));
    assert!(layout.page_count() > 2);
    assert_eq!(layout.items(), markdown_items(&md));

    let bytes = export_document(&result).unwrap();
    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(parsed.get_pages().len(), layout.page_count());
}

#[test]
fn test_document_is_deterministic() {
    let result = result_with(&[200, 404], 2, Some(ai_payload([8.0; 5])));
    assert_eq!(
        export_document(&result).unwrap(),
        export_document(&result).unwrap()
    );
}
