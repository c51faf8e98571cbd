//! Report composition and the shared export outline.

mod composer;
mod outline;

pub use composer::{compose_from_raw, compose_report, compose_result};
pub use outline::{format_score, OutlineEntry, OutlineSection, ReportOutline, SectionLevel};
