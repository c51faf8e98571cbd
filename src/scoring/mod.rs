//! Overall quality score.
//!
//! The score is a pure function of an `AnalysisResult` and is recomputed on
//! demand; it is never stored. It averages:
//! - five AI terms when the AI analysis succeeded (missing values count as `0`),
//! - one link-health term (`successful / total * 10`, or `10` without links),
//! - one HTML-cleanliness term (`max(0, 10 - issue count)`).
//!
//! The number of terms is therefore 2 without AI and 7 with AI, so toggling
//! the AI signal changes how much link and HTML problems weigh.

use std::fmt;

use strum_macros::{AsRefStr, Display, EnumIter};

use crate::config::{MAX_SCORE, SCORE_FAIR_THRESHOLD, SCORE_GOOD_THRESHOLD};
use crate::models::{AiAnalysis, AnalysisResult};

/// One contributor to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum ScoreComponent {
    #[strum(serialize = "Spelling & Grammar")]
    SpellingGrammar,
    #[strum(serialize = "Readability")]
    Readability,
    #[strum(serialize = "Call-to-Action")]
    CtaEffectiveness,
    #[strum(serialize = "Subject line")]
    SubjectLine,
    #[strum(serialize = "Structure")]
    Structure,
    #[strum(serialize = "Link health")]
    LinkHealth,
    #[strum(serialize = "HTML cleanliness")]
    HtmlCleanliness,
}

/// A component together with the value it contributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTerm {
    pub component: ScoreComponent,
    pub value: f64,
}

/// Qualitative band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    /// Band of any score on the 0-10 scale (AI sub-scores included).
    pub fn from_score(score: f64) -> Self {
        if score >= f64::from(SCORE_GOOD_THRESHOLD) {
            ScoreBand::Good
        } else if score >= f64::from(SCORE_FAIR_THRESHOLD) {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

/// Overall score, an integer in `[0, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverallScore(u8);

impl OverallScore {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn band(self) -> ScoreBand {
        ScoreBand::from_score(f64::from(self.0))
    }

    /// Rounds an average to the nearest integer (halves round up), clamped to `[0, 10]`.
    fn from_average(average: f64) -> Self {
        if !average.is_finite() {
            return OverallScore(0);
        }
        // Clamped to [0, 10] before the cast
        OverallScore(average.clamp(0.0, MAX_SCORE).round() as u8)
    }
}

impl fmt::Display for OverallScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lists every term contributing to the overall score, in averaging order.
pub fn score_breakdown(result: &AnalysisResult) -> Vec<ScoreTerm> {
    score_terms(
        result.successful_links(),
        result.links().len(),
        result.html_issues().len(),
        result.ai_analysis(),
    )
}

/// Computes the overall score of an analysis.
pub fn overall_score(result: &AnalysisResult) -> OverallScore {
    let terms = score_breakdown(result);
    let score = average(&terms);
    log::debug!(
        "Overall score {} from {} terms: {}",
        score,
        terms.len(),
        terms
            .iter()
            .map(|t| format!("{}={}", t.component, t.value))
            .collect::<Vec<_>>()
            .join(", ")
    );
    score
}

/// Score terms from already-counted inputs.
pub fn score_terms(
    successful_links: usize,
    total_links: usize,
    html_issue_count: usize,
    ai: Option<&AiAnalysis>,
) -> Vec<ScoreTerm> {
    let mut terms = Vec::with_capacity(7);

    if let Some(ai) = ai {
        let ai_terms = [
            (
                ScoreComponent::SpellingGrammar,
                ai.spelling_grammar.as_ref().and_then(|s| s.score),
            ),
            (
                ScoreComponent::Readability,
                ai.readability.as_ref().and_then(|s| s.score),
            ),
            (
                ScoreComponent::CtaEffectiveness,
                ai.cta_evaluation.as_ref().and_then(|s| s.effectiveness),
            ),
            (
                ScoreComponent::SubjectLine,
                ai.subject_preheader.as_ref().and_then(|s| s.subject_score),
            ),
            (
                ScoreComponent::Structure,
                ai.structure.as_ref().and_then(|s| s.score),
            ),
        ];
        terms.extend(ai_terms.into_iter().map(|(component, value)| ScoreTerm {
            component,
            value: clamp_score(value.unwrap_or(0.0)),
        }));
    }

    terms.push(ScoreTerm {
        component: ScoreComponent::LinkHealth,
        value: link_health(successful_links, total_links),
    });
    terms.push(ScoreTerm {
        component: ScoreComponent::HtmlCleanliness,
        value: html_cleanliness(html_issue_count),
    });
    terms
}

/// `successful / total * 10`, or `10` when there are no links.
pub fn link_health(successful_links: usize, total_links: usize) -> f64 {
    if total_links == 0 {
        return MAX_SCORE;
    }
    successful_links.min(total_links) as f64 / total_links as f64 * MAX_SCORE
}

/// `max(0, 10 - issue count)`.
pub fn html_cleanliness(html_issue_count: usize) -> f64 {
    (MAX_SCORE - html_issue_count as f64).max(0.0)
}

fn average(terms: &[ScoreTerm]) -> OverallScore {
    if terms.is_empty() {
        return OverallScore(0);
    }
    let sum: f64 = terms.iter().map(|t| t.value).sum();
    OverallScore::from_average(sum / terms.len() as f64)
}

/// Clamps an AI sub-score into `[0, 10]`; non-finite values become `0`.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, MAX_SCORE)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Readability, SpellingGrammar};

    #[test]
    fn test_link_health() {
        assert_eq!(link_health(0, 0), 10.0);
        assert_eq!(link_health(3, 4), 7.5);
        assert_eq!(link_health(0, 5), 0.0);
        assert_eq!(link_health(2, 2), 10.0);
    }

    #[test]
    fn test_html_cleanliness_floors_at_zero() {
        assert_eq!(html_cleanliness(0), 10.0);
        assert_eq!(html_cleanliness(2), 8.0);
        assert_eq!(html_cleanliness(10), 0.0);
        assert_eq!(html_cleanliness(25), 0.0);
    }

    #[test]
    fn test_without_ai_two_terms() {
        let terms = score_terms(3, 4, 2, None);
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].component, ScoreComponent::LinkHealth);
        assert_eq!(terms[1].component, ScoreComponent::HtmlCleanliness);
        assert_eq!(average(&terms).value(), 8);
    }

    #[test]
    fn test_missing_ai_fields_contribute_zero() {
        let ai = AiAnalysis {
            spelling_grammar: Some(SpellingGrammar::from(10.0)),
            readability: Some(Readability::default()),
            ..Default::default()
        };
        let terms = score_terms(0, 0, 0, Some(&ai));
        assert_eq!(terms.len(), 7);
        let values: Vec<f64> = terms.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![10.0, 0.0, 0.0, 0.0, 0.0, 10.0, 10.0]);
        // 30 / 7 = 4.29
        assert_eq!(average(&terms).value(), 4);
    }

    #[test]
    fn test_ai_scores_are_clamped() {
        let ai = AiAnalysis {
            spelling_grammar: Some(SpellingGrammar::from(42.0)),
            readability: Some(Readability::from(-3.0)),
            ..Default::default()
        };
        let terms = score_terms(0, 0, 0, Some(&ai));
        assert_eq!(terms[0].value, 10.0);
        assert_eq!(terms[1].value, 0.0);
    }

    #[test]
    fn test_empty_terms_score_zero() {
        assert_eq!(average(&[]).value(), 0);
    }

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(OverallScore::from_average(7.5).value(), 8);
        assert_eq!(OverallScore::from_average(7.49).value(), 7);
        assert_eq!(OverallScore::from_average(f64::NAN).value(), 0);
    }

    #[test]
    fn test_bands() {
        assert_eq!(OverallScore(10).band(), ScoreBand::Good);
        assert_eq!(OverallScore(8).band(), ScoreBand::Good);
        assert_eq!(OverallScore(7).band(), ScoreBand::Fair);
        assert_eq!(OverallScore(6).band(), ScoreBand::Fair);
        assert_eq!(OverallScore(5).band(), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(7.9), ScoreBand::Fair);
    }
}
