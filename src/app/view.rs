//! Results view model.
//!
//! A plain-data description of what the results panel shows, built once from
//! an `AnalysisResult`. The AI tab is always listed; when the AI signal is
//! missing or failed its panel degrades to an explanation while the summary and
//! technical panels stay complete.

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::links::StatusCounts;
use crate::models::{AiOutcome, AnalysisResult};
use crate::report::{OutlineSection, ReportOutline, SectionLevel};
use crate::scoring::{overall_score, OverallScore, ScoreBand};

/// Hint shown in the degraded AI panel.
pub const AI_KEY_HINT: &str =
    "Set an AI API key (--ai-api-key or NEWSLETTER_AI_API_KEY) to enable the AI analysis.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum ResultsTab {
    #[strum(serialize = "Summary")]
    Summary,
    #[strum(serialize = "AI Analysis")]
    AiAnalysis,
    #[strum(serialize = "Technical")]
    Technical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPanel {
    pub critical_issues: Vec<String>,
    pub warnings: Vec<String>,
    /// No critical issues and no warnings
    pub all_clear: bool,
    pub tiles: Vec<StatTile>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AiPanel {
    Available { sections: Vec<OutlineSection> },
    Degraded { reason: String, hint: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicalPanel {
    pub html_issues: Vec<String>,
    pub html_size_chars: usize,
    pub analysis_timestamp: String,
    pub clean_html: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub score: OverallScore,
    pub summary: SummaryPanel,
    pub ai: AiPanel,
    pub technical: TechnicalPanel,
    pub link_counts: StatusCounts,
}

impl ResultsView {
    /// Builds the view; `html_source` is only measured.
    pub fn build(result: &AnalysisResult, html_source: &str) -> Self {
        let report = result.report();
        let score = overall_score(result);

        let summary = SummaryPanel {
            critical_issues: report.critical_issues.clone(),
            warnings: report.warnings.clone(),
            all_clear: report.critical_issues.is_empty() && report.warnings.is_empty(),
            tiles: vec![
                StatTile {
                    label: "Total links",
                    value: report.total_links.to_string(),
                },
                StatTile {
                    label: "Broken links",
                    value: report.broken_links.to_string(),
                },
                StatTile {
                    label: "HTML issues",
                    value: result.html_issues().len().to_string(),
                },
                StatTile {
                    label: "Overall score",
                    value: format!("{}/10", score),
                },
            ],
        };

        let ai = match result.ai_outcome() {
            Some(AiOutcome::Available(_)) => AiPanel::Available {
                sections: ReportOutline::from_result(result)
                    .sections
                    .into_iter()
                    .filter(|s| s.level == SectionLevel::Subsection)
                    .collect(),
            },
            Some(AiOutcome::Unavailable { reason }) => AiPanel::Degraded {
                reason: reason.clone(),
                hint: AI_KEY_HINT,
            },
            None => AiPanel::Degraded {
                reason: "AI analysis was not requested".to_string(),
                hint: AI_KEY_HINT,
            },
        };

        let technical = TechnicalPanel {
            html_issues: result
                .html_issues()
                .iter()
                .map(|issue| issue.to_string())
                .collect(),
            html_size_chars: html_source.chars().count(),
            analysis_timestamp: report.analysis_timestamp.to_rfc3339(),
            clean_html: result.html_issues().is_empty(),
        };

        Self {
            score,
            summary,
            ai,
            technical,
            link_counts: StatusCounts::from_links(result.links()),
        }
    }

    pub fn band(&self) -> ScoreBand {
        self.score.band()
    }

    /// Tabs in display order; always all three.
    pub fn tabs(&self) -> Vec<ResultsTab> {
        ResultsTab::iter().collect()
    }

    pub fn ai_degraded(&self) -> bool {
        matches!(self.ai, AiPanel::Degraded { .. })
    }
}

/// Band of an AI section's score, if it has one.
pub fn section_band(section: &OutlineSection) -> Option<ScoreBand> {
    section.score.map(ScoreBand::from_score)
}
