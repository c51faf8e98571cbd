//! Link records and their verification status.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::links::{classify_probe, LinkCategory, LinkProtocol, ProbeOutcome};

/// Verification status of one link.
///
/// `Pending` is the only non-terminal state: once a link is resolved to
/// `Success`, `Warning` or `Error` it never changes again.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LinkStatus {
    Success,
    Warning,
    Error,
    #[default]
    Pending,
}

impl LinkStatus {
    /// True once verification has completed.
    pub fn is_resolved(self) -> bool {
        self != LinkStatus::Pending
    }
}

/// One hyperlink extracted from the newsletter together with its verification outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub url: String,
    pub text: Option<String>,
    status: LinkStatus,
    status_code: Option<u16>,
    pub title: Option<String>,
    pub favicon_url: Option<String>,
    pub preview_image_url: Option<String>,
    pub description: Option<String>,
    /// Transport error reported by the probe when no status code was obtained
    failure_reason: Option<String>,
}

impl LinkRecord {
    /// Creates a link whose verification is still outstanding.
    pub fn pending(url: impl Into<String>, text: Option<String>) -> Self {
        Self {
            url: url.into(),
            text,
            status: LinkStatus::Pending,
            status_code: None,
            title: None,
            favicon_url: None,
            preview_image_url: None,
            description: None,
            failure_reason: None,
        }
    }

    /// Creates a link and immediately resolves it from a probe outcome.
    pub fn from_probe(text: Option<String>, probe: &ProbeOutcome) -> Self {
        let mut record = Self::pending(probe.url.clone(), text);
        record.resolve(probe);
        record
    }

    pub fn status(&self) -> LinkStatus {
        self.status
    }

    /// HTTP status code returned for the link; set together with the status.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    /// Applies a probe outcome to a pending link.
    ///
    /// Returns `false` and leaves the record untouched when the link was
    /// already resolved.
    pub fn resolve(&mut self, probe: &ProbeOutcome) -> bool {
        if self.status.is_resolved() {
            log::debug!(
                "Ignoring probe outcome for already resolved link {} ({})",
                self.url,
                self.status
            );
            return false;
        }
        self.status = classify_probe(Some(probe));
        self.status_code = probe.status_code;
        self.failure_reason = if probe.status_code.is_none() {
            probe.error.clone()
        } else {
            None
        };
        true
    }

    pub fn category(&self) -> LinkCategory {
        LinkCategory::from_url(&self.url)
    }

    pub fn protocol(&self) -> LinkProtocol {
        LinkProtocol::from_url(&self.url)
    }
}
