//! Format-independent outline of an exported report.
//!
//! Both exporters render a `ReportOutline` and nothing else, so the Markdown
//! and the printable document always carry the same sections in the same
//! order with the same content.

use crate::config::{EXPORT_DATE_FORMAT, REPORT_TITLE};
use crate::models::{AiAnalysis, AnalysisResult, HtmlIssue, Report};
use crate::scoring::{clamp_score, overall_score, OverallScore};

/// Heading depth of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLevel {
    Section,
    Subsection,
}

/// One piece of section content.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineEntry {
    /// `label: value`
    Field { label: String, value: String },
    /// Bulleted list, optionally introduced by a label
    List {
        label: Option<String>,
        items: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineSection {
    pub level: SectionLevel,
    pub label: String,
    /// Score shown next to the label (`label (8/10)`)
    pub score: Option<f64>,
    pub entries: Vec<OutlineEntry>,
}

impl OutlineSection {
    fn new(level: SectionLevel, label: &str) -> Self {
        Self {
            level,
            label: label.to_string(),
            score: None,
            entries: Vec::new(),
        }
    }

    /// Scores are shown as they count toward the overall score.
    fn with_score(mut self, score: Option<f64>) -> Self {
        self.score = score.map(clamp_score);
        self
    }

    fn field(mut self, label: &str, value: impl ToString) -> Self {
        self.entries.push(OutlineEntry::Field {
            label: label.to_string(),
            value: value.to_string(),
        });
        self
    }

    fn list(mut self, label: Option<&str>, items: &[String]) -> Self {
        if !items.is_empty() {
            self.entries.push(OutlineEntry::List {
                label: label.map(str::to_string),
                items: items.to_vec(),
            });
        }
        self
    }

    /// Heading text as rendered by every exporter.
    pub fn heading(&self) -> String {
        match self.score {
            Some(score) => format!("{} ({}/10)", self.label, format_score(score)),
            None => self.label.clone(),
        }
    }
}

/// Everything an exporter renders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutline {
    pub title: String,
    pub date: String,
    pub score: OverallScore,
    pub sections: Vec<OutlineSection>,
}

impl ReportOutline {
    /// Builds the outline from the exporters' inputs.
    ///
    /// Critical issues and warnings sections appear only when non-empty; the
    /// AI section appears only when the AI analysis succeeded.
    pub fn build(
        report: &Report,
        score: OverallScore,
        ai: Option<&AiAnalysis>,
        html_issues: &[HtmlIssue],
    ) -> Self {
        let mut sections = vec![OutlineSection::new(SectionLevel::Section, "Summary")
            .field("Total links", report.total_links)
            .field("Broken links", report.broken_links)
            .field("HTML issues", html_issues.len())
            .field("Critical issues", report.critical_issues.len())];

        if !report.critical_issues.is_empty() {
            sections.push(
                OutlineSection::new(SectionLevel::Section, "Critical issues")
                    .list(None, &report.critical_issues),
            );
        }
        if !report.warnings.is_empty() {
            sections.push(
                OutlineSection::new(SectionLevel::Section, "Warnings")
                    .list(None, &report.warnings),
            );
        }
        if let Some(ai) = ai {
            sections.push(OutlineSection::new(SectionLevel::Section, "AI Analysis"));
            sections.extend(ai_sections(ai));
        }

        Self {
            title: REPORT_TITLE.to_string(),
            date: report
                .analysis_timestamp
                .format(EXPORT_DATE_FORMAT)
                .to_string(),
            score,
            sections,
        }
    }

    /// Builds the outline of a composed analysis result.
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self::build(
            result.report(),
            overall_score(result),
            result.ai_analysis(),
            result.html_issues(),
        )
    }

    /// Section headings in order, as rendered.
    pub fn section_labels(&self) -> Vec<String> {
        self.sections.iter().map(OutlineSection::heading).collect()
    }
}

fn ai_sections(ai: &AiAnalysis) -> Vec<OutlineSection> {
    let mut sections = Vec::new();
    let sub = |label: &str| OutlineSection::new(SectionLevel::Subsection, label);

    if let Some(s) = &ai.spelling_grammar {
        sections.push(
            sub("Spelling & Grammar")
                .with_score(s.score)
                .list(Some("Errors"), &s.errors)
                .list(Some("Suggestions"), &s.suggestions),
        );
    }
    if let Some(r) = &ai.readability {
        let mut section = sub("Readability").with_score(r.score);
        if let Some(level) = &r.level {
            section = section.field("Level", level);
        }
        sections.push(section.list(Some("Suggestions"), &r.suggestions));
    }
    if let Some(c) = &ai.cta_evaluation {
        sections.push(
            sub("Call-to-Action")
                .with_score(c.effectiveness)
                .list(Some("Detected CTAs"), &c.detected_ctas)
                .list(Some("Suggestions"), &c.suggestions),
        );
    }
    if let Some(sp) = &ai.subject_preheader {
        let mut section = sub("Subject & Preheader").with_score(sp.subject_score);
        if let Some(preheader) = sp.preheader_score {
            let preheader = format_score(clamp_score(preheader));
            section = section.field("Preheader score", format!("{}/10", preheader));
        }
        sections.push(section.list(Some("Suggestions"), &sp.suggestions));
    }
    if let Some(st) = &ai.structure {
        sections.push(
            sub("Structure")
                .with_score(st.score)
                .list(Some("Problems"), &st.problems)
                .list(Some("Suggestions"), &st.suggestions),
        );
    }
    sections
}

/// Formats a score with at most two decimals and no trailing zeros (`7.5`, `8`).
pub fn format_score(score: f64) -> String {
    let rounded = (score * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // Avoids "-0"
        return "0".to_string();
    }
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Readability, SpellingGrammar, Structure};
    use crate::report::compose_report;
    use chrono::{TimeZone, Utc};

    fn report(critical: &[&str], warnings: &[&str]) -> Report {
        let mut report = compose_report(
            &[],
            &[],
            Utc.with_ymd_and_hms(2024, 5, 1, 23, 59, 0).unwrap(),
        );
        report.critical_issues = critical.iter().map(|s| s.to_string()).collect();
        report.warnings = warnings.iter().map(|s| s.to_string()).collect();
        report
    }

    fn score(result_value: u8) -> OverallScore {
        // OverallScore has no public constructor; derive it from a composed result
        let links = Vec::new();
        let issues: Vec<HtmlIssue> = (0..(10 - result_value) as usize * 2)
            .map(|i| HtmlIssue::new(format!("issue {i}")))
            .collect();
        let result = crate::report::compose_result(
            links,
            issues,
            None,
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        );
        overall_score(&result)
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(8.0), "8");
        assert_eq!(format_score(7.5), "7.5");
        assert_eq!(format_score(6.666), "6.67");
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(-0.0), "0");
    }

    #[test]
    fn test_minimal_outline_has_only_summary() {
        let outline = ReportOutline::build(&report(&[], &[]), score(10), None, &[]);
        assert_eq!(outline.title, "Newsletter Analysis Report");
        assert_eq!(outline.date, "2024-05-01");
        assert_eq!(outline.score.value(), 10);
        assert_eq!(outline.section_labels(), vec!["Summary".to_string()]);
        assert_eq!(outline.sections[0].entries.len(), 4);
    }

    #[test]
    fn test_conditional_sections_in_order() {
        let ai = AiAnalysis {
            spelling_grammar: Some(SpellingGrammar {
                score: Some(8.0),
                errors: vec![],
                suggestions: vec!["Fix typo".to_string()],
            }),
            readability: Some(Readability {
                score: Some(6.5),
                level: Some("medium".to_string()),
                suggestions: vec![],
            }),
            structure: Some(Structure::default()),
            ..Default::default()
        };
        let outline = ReportOutline::build(
            &report(&["Broken link x (HTTP 404)"], &["Missing alt"]),
            score(8),
            Some(&ai),
            &[HtmlIssue::new("Missing alt")],
        );
        assert_eq!(
            outline.section_labels(),
            vec![
                "Summary",
                "Critical issues",
                "Warnings",
                "AI Analysis",
                "Spelling & Grammar (8/10)",
                "Readability (6.5/10)",
                "Structure",
            ]
        );
        let readability = &outline.sections[5];
        assert_eq!(
            readability.entries,
            vec![OutlineEntry::Field {
                label: "Level".to_string(),
                value: "medium".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_lists_are_omitted() {
        let ai = AiAnalysis {
            spelling_grammar: Some(SpellingGrammar::from(9.0)),
            ..Default::default()
        };
        let outline = ReportOutline::build(&report(&[], &[]), score(9), Some(&ai), &[]);
        let spelling = outline.sections.last().unwrap();
        assert!(spelling.entries.is_empty());
    }

    #[test]
    fn test_headings_show_clamped_scores() {
        let ai = AiAnalysis {
            spelling_grammar: Some(SpellingGrammar::from(42.0)),
            readability: Some(Readability::from(-3.0)),
            structure: Some(Structure::from(f64::NAN)),
            ..Default::default()
        };
        let outline = ReportOutline::build(&report(&[], &[]), score(5), Some(&ai), &[]);
        assert_eq!(
            outline.section_labels(),
            vec![
                "Summary",
                "AI Analysis",
                "Spelling & Grammar (10/10)",
                "Readability (0/10)",
                "Structure (0/10)",
            ]
        );
    }
}
