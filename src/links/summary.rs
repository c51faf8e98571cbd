//! Per-status link counts and human-readable status messages.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use crate::models::{LinkRecord, LinkStatus};

/// Number of links in each status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts {
    counts: HashMap<LinkStatus, usize>,
}

impl StatusCounts {
    pub fn from_links(links: &[LinkRecord]) -> Self {
        let mut counts: HashMap<LinkStatus, usize> =
            LinkStatus::iter().map(|status| (status, 0)).collect();
        for link in links {
            *counts.entry(link.status()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, status: LinkStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Counts in a stable display order.
    pub fn iter(&self) -> impl Iterator<Item = (LinkStatus, usize)> + '_ {
        LinkStatus::iter().map(move |status| (status, self.get(status)))
    }
}

/// Short description of a link's verification state.
pub fn status_message(link: &LinkRecord) -> String {
    match (link.status(), link.status_code()) {
        (LinkStatus::Pending, _) => "Verification pending".to_string(),
        (LinkStatus::Success, Some(code)) => format!("Reachable ({code})"),
        (LinkStatus::Success, None) => "Reachable".to_string(),
        (LinkStatus::Error, Some(404)) => "Page not found (404)".to_string(),
        (LinkStatus::Error, Some(code)) => format!("Unreachable ({code})"),
        (LinkStatus::Error, None) => "Unreachable".to_string(),
        (LinkStatus::Warning, Some(code)) => format!("Needs attention ({code})"),
        (LinkStatus::Warning, None) => "Needs attention".to_string(),
    }
}
