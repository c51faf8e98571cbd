//! Request and response shapes of the remote analysis backend.
//!
//! The response is read leniently: unknown fields are ignored (including the
//! backend's own `report`, which is always recomposed locally), and link
//! statuses the backend reports are only used to reconstruct the probe
//! outcome that `links::classify_probe` then classifies.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::analysis::HtmlIssue;
use super::link::{LinkRecord, LinkStatus};
use crate::config::AnalysisSettings;
use crate::links::ProbeOutcome;

/// Body of the remote analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub html_content: String,
    pub ai_api_key: Option<String>,
    pub subject: Option<String>,
    pub preheader: Option<String>,
    pub sender: Option<String>,
}

impl AnalysisRequest {
    /// Builds a request from the markup and the (pass-through) settings.
    pub fn new(html_content: impl Into<String>, settings: &AnalysisSettings) -> Self {
        let settings = settings.normalized();
        Self {
            html_content: html_content.into(),
            ai_api_key: settings.ai_api_key,
            subject: settings.subject,
            preheader: settings.preheader,
            sender: settings.sender,
        }
    }
}

/// One link as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawLink {
    pub url: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "favicon")]
    pub favicon_url: Option<String>,
    #[serde(default, alias = "preview_image")]
    pub preview_image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RawLink {
    /// Reconstructs the probe outcome, or `None` while the probe is outstanding.
    ///
    /// A link reported as `error` without a status code or error message is
    /// treated as a transport failure ("unreachable").
    pub fn probe_outcome(&self) -> Option<ProbeOutcome> {
        let reported = self
            .status
            .as_deref()
            .and_then(|s| LinkStatus::from_str(s).ok())
            .unwrap_or(LinkStatus::Pending);

        if reported == LinkStatus::Pending && self.status_code.is_none() && self.error.is_none() {
            return None;
        }

        let error = match (&self.error, reported, self.status_code) {
            (Some(error), _, _) => Some(error.clone()),
            (None, LinkStatus::Error, None) => Some("unreachable".to_string()),
            _ => None,
        };

        Some(ProbeOutcome {
            url: self.url.clone(),
            ok: reported == LinkStatus::Success,
            status_code: self.status_code,
            error,
        })
    }

    /// Converts into a classified link record.
    pub fn into_record(self) -> LinkRecord {
        let text = self.text.clone().filter(|t| !t.trim().is_empty());
        let mut record = match self.probe_outcome() {
            Some(probe) => LinkRecord::from_probe(text, &probe),
            None => LinkRecord::pending(self.url.clone(), text),
        };
        record.title = self.title;
        record.favicon_url = self.favicon_url;
        record.preview_image_url = self.preview_image_url;
        record.description = self.description;
        record
    }
}

/// Body of a successful remote analysis response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAnalysis {
    #[serde(default)]
    pub links: Vec<RawLink>,
    #[serde(default)]
    pub html_issues: Vec<HtmlIssue>,
    /// Either an analysis object or `{ "error": ... }`; absent when AI was not requested
    #[serde(default)]
    pub ai_analysis: Option<serde_json::Value>,
}
