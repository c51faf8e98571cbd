//! The composed report and the full analysis result.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ai::{AiAnalysis, AiOutcome};
use super::link::{LinkRecord, LinkStatus};

/// Human-readable description of one structural HTML problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HtmlIssue(String);

impl HtmlIssue {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HtmlIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HtmlIssue {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for HtmlIssue {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Canonical report built once per analysis run.
///
/// `critical_issues` block sending; `warnings` are advisory. The partition is
/// computed by `report::compose_report`, never taken from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total_links: usize,
    pub broken_links: usize,
    pub critical_issues: Vec<String>,
    pub warnings: Vec<String>,
    pub analysis_timestamp: DateTime<Utc>,
}

/// Everything one analysis produced.
///
/// Created once per analysis and never modified; the next analysis replaces it
/// wholesale. Scores and exports are derived from it on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    links: Vec<LinkRecord>,
    html_issues: Vec<HtmlIssue>,
    ai_analysis: Option<AiOutcome>,
    report: Report,
}

impl AnalysisResult {
    pub(crate) fn new(
        links: Vec<LinkRecord>,
        html_issues: Vec<HtmlIssue>,
        ai_analysis: Option<AiOutcome>,
        report: Report,
    ) -> Self {
        Self {
            links,
            html_issues,
            ai_analysis,
            report,
        }
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    pub fn html_issues(&self) -> &[HtmlIssue] {
        &self.html_issues
    }

    /// Raw AI outcome: `None` when the backend sent no AI section at all.
    pub fn ai_outcome(&self) -> Option<&AiOutcome> {
        self.ai_analysis.as_ref()
    }

    /// The AI analysis only when it succeeded.
    pub fn ai_analysis(&self) -> Option<&AiAnalysis> {
        self.ai_analysis.as_ref().and_then(AiOutcome::analysis)
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Number of links whose verification succeeded.
    pub fn successful_links(&self) -> usize {
        self.links
            .iter()
            .filter(|link| link.status() == LinkStatus::Success)
            .count()
    }
}
