//! AI critique of the newsletter copy.
//!
//! Every sub-evaluation is optional and every score inside it is optional:
//! a missing value contributes `0` to scoring instead of raising an error.
//! Each sub-evaluation may arrive either as an object or as a bare number,
//! in which case the number is its score. French field names used by some
//! backends are accepted as aliases.

use serde::{Deserialize, Deserializer};

/// Spelling and grammar evaluation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpellingGrammar {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, alias = "erreurs")]
    pub errors: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Readability evaluation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Readability {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, alias = "niveau")]
    pub level: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Call-to-action evaluation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CtaEvaluation {
    #[serde(default, alias = "efficacite")]
    pub effectiveness: Option<f64>,
    #[serde(default, alias = "ctas_detectes")]
    pub detected_ctas: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Subject line and preheader evaluation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubjectPreheader {
    #[serde(default, alias = "sujet_score")]
    pub subject_score: Option<f64>,
    #[serde(default)]
    pub preheader_score: Option<f64>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Structural evaluation of the content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Structure {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, alias = "problemes")]
    pub problems: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl From<f64> for SpellingGrammar {
    fn from(score: f64) -> Self {
        Self {
            score: Some(score),
            ..Default::default()
        }
    }
}

impl From<f64> for Readability {
    fn from(score: f64) -> Self {
        Self {
            score: Some(score),
            ..Default::default()
        }
    }
}

impl From<f64> for CtaEvaluation {
    fn from(score: f64) -> Self {
        Self {
            effectiveness: Some(score),
            ..Default::default()
        }
    }
}

impl From<f64> for SubjectPreheader {
    fn from(score: f64) -> Self {
        Self {
            subject_score: Some(score),
            ..Default::default()
        }
    }
}

impl From<f64> for Structure {
    fn from(score: f64) -> Self {
        Self {
            score: Some(score),
            ..Default::default()
        }
    }
}

/// A successful AI critique.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AiAnalysis {
    #[serde(
        default,
        alias = "orthographe_grammaire",
        deserialize_with = "bare_or_detailed"
    )]
    pub spelling_grammar: Option<SpellingGrammar>,
    #[serde(default, alias = "lisibilite", deserialize_with = "bare_or_detailed")]
    pub readability: Option<Readability>,
    #[serde(default, deserialize_with = "bare_or_detailed")]
    pub cta_evaluation: Option<CtaEvaluation>,
    #[serde(
        default,
        alias = "sujet_preheader",
        deserialize_with = "bare_or_detailed"
    )]
    pub subject_preheader: Option<SubjectPreheader>,
    #[serde(default, deserialize_with = "bare_or_detailed")]
    pub structure: Option<Structure>,
}

/// Outcome of the optional AI signal.
///
/// `Unavailable` is an expected state (no credential configured, or the
/// upstream AI call failed) and only degrades the AI part of the presentation.
#[derive(Debug, Clone, PartialEq)]
pub enum AiOutcome {
    Available(AiAnalysis),
    Unavailable { reason: String },
}

impl AiOutcome {
    /// Converts the raw `ai_analysis` JSON value of a backend response.
    ///
    /// An object carrying an `error` key, whatever its value, is an
    /// unavailable analysis; a non-string error is kept as its JSON text. Any
    /// payload that cannot be read as an analysis is also treated as
    /// unavailable rather than failing the whole report.
    pub fn from_value(value: serde_json::Value) -> Self {
        if let Some(error) = value.get("error") {
            let reason = match error.as_str() {
                Some(reason) => reason.to_string(),
                None => error.to_string(),
            };
            return AiOutcome::Unavailable { reason };
        }
        match serde_json::from_value::<AiAnalysis>(value) {
            Ok(analysis) => AiOutcome::Available(analysis),
            Err(e) => {
                log::warn!("Discarding malformed AI analysis: {e}");
                AiOutcome::Unavailable {
                    reason: format!("Malformed AI analysis: {e}"),
                }
            }
        }
    }

    /// The analysis when the AI signal succeeded.
    pub fn analysis(&self) -> Option<&AiAnalysis> {
        match self {
            AiOutcome::Available(analysis) => Some(analysis),
            AiOutcome::Unavailable { .. } => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BareOrDetailed<T> {
    Bare(f64),
    Detailed(T),
}

fn bare_or_detailed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + From<f64>,
{
    let value = Option::<BareOrDetailed<T>>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        BareOrDetailed::Bare(score) => T::from(score),
        BareOrDetailed::Detailed(detailed) => detailed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detailed_analysis() {
        let outcome = AiOutcome::from_value(json!({
            "spelling_grammar": {"score": 8, "suggestions": ["Fix typo in header"]},
            "readability": {"score": 6.5, "level": "medium", "suggestions": []},
            "cta_evaluation": {"effectiveness": 9, "detected_ctas": ["Shop now"], "suggestions": []},
            "subject_preheader": {"subject_score": 7, "preheader_score": 5, "suggestions": []},
            "structure": {"score": 5}
        }));
        let analysis = outcome.analysis().expect("analysis should be available");
        assert_eq!(analysis.spelling_grammar.as_ref().unwrap().score, Some(8.0));
        assert_eq!(
            analysis.readability.as_ref().unwrap().level.as_deref(),
            Some("medium")
        );
        assert_eq!(
            analysis.cta_evaluation.as_ref().unwrap().detected_ctas,
            vec!["Shop now".to_string()]
        );
        assert_eq!(
            analysis.subject_preheader.as_ref().unwrap().preheader_score,
            Some(5.0)
        );
        assert_eq!(analysis.structure.as_ref().unwrap().score, Some(5.0));
    }

    #[test]
    fn test_bare_scores() {
        let outcome = AiOutcome::from_value(json!({
            "spelling_grammar": 8,
            "structure": 4.5
        }));
        let analysis = outcome.analysis().unwrap();
        assert_eq!(analysis.spelling_grammar.as_ref().unwrap().score, Some(8.0));
        assert!(analysis.spelling_grammar.as_ref().unwrap().suggestions.is_empty());
        assert_eq!(analysis.structure.as_ref().unwrap().score, Some(4.5));
        assert!(analysis.readability.is_none());
    }

    #[test]
    fn test_french_aliases() {
        let outcome = AiOutcome::from_value(json!({
            "orthographe_grammaire": {"score": 7, "erreurs": ["accord"], "suggestions": ["Relire"]},
            "lisibilite": {"score": 6, "niveau": "moyen"},
            "cta_evaluation": {"efficacite": 8, "ctas_detectes": ["Acheter"]},
            "sujet_preheader": {"sujet_score": 9, "preheader_score": 4},
            "structure": {"score": 5, "problemes": ["Trop long"]}
        }));
        let analysis = outcome.analysis().unwrap();
        let spelling = analysis.spelling_grammar.as_ref().unwrap();
        assert_eq!(spelling.score, Some(7.0));
        assert_eq!(spelling.errors, vec!["accord".to_string()]);
        assert_eq!(
            analysis.readability.as_ref().unwrap().level.as_deref(),
            Some("moyen")
        );
        assert_eq!(
            analysis.cta_evaluation.as_ref().unwrap().effectiveness,
            Some(8.0)
        );
        assert_eq!(
            analysis.subject_preheader.as_ref().unwrap().subject_score,
            Some(9.0)
        );
        assert_eq!(
            analysis.structure.as_ref().unwrap().problems,
            vec!["Trop long".to_string()]
        );
    }

    #[test]
    fn test_error_payload_is_unavailable() {
        let outcome = AiOutcome::from_value(json!({"error": "Missing API key"}));
        assert_eq!(
            outcome,
            AiOutcome::Unavailable {
                reason: "Missing API key".to_string()
            }
        );
        assert!(outcome.analysis().is_none());
    }

    #[test]
    fn test_any_error_key_is_unavailable() {
        let outcome = AiOutcome::from_value(json!({"error": {"message": "quota exceeded"}}));
        assert_eq!(
            outcome,
            AiOutcome::Unavailable {
                reason: r#"{"message":"quota exceeded"}"#.to_string()
            }
        );

        let outcome = AiOutcome::from_value(json!({"error": null, "readability": 8}));
        assert_eq!(
            outcome,
            AiOutcome::Unavailable {
                reason: "null".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_payload_is_unavailable() {
        let outcome = AiOutcome::from_value(json!("not an object"));
        match outcome {
            AiOutcome::Unavailable { reason } => assert!(reason.starts_with("Malformed")),
            AiOutcome::Available(_) => panic!("string payload should not be an analysis"),
        }
    }

    #[test]
    fn test_missing_sub_fields() {
        let outcome = AiOutcome::from_value(json!({"readability": {"level": "easy"}}));
        let analysis = outcome.analysis().unwrap();
        assert_eq!(analysis.readability.as_ref().unwrap().score, None);
        assert!(analysis.spelling_grammar.is_none());
    }
}
