//! Export types and default filenames.

use chrono::{DateTime, Utc};
use clap::ValueEnum;

use crate::config::EXPORT_FILENAME_PREFIX;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum ExportFormat {
    /// Markdown text (`.md`)
    Markdown,
    /// Paginated printable document (`.pdf`)
    Pdf,
}

impl ExportFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Default export filename: `newsletter-report-<unix millis>.<ext>`.
///
/// Uniqueness across exports is up to the caller; two exports of the same
/// analysis in the same format get the same name.
pub fn default_filename(format: ExportFormat, analysis_timestamp: DateTime<Utc>) -> String {
    format!(
        "{}-{}.{}",
        EXPORT_FILENAME_PREFIX,
        analysis_timestamp.timestamp_millis(),
        format.extension()
    )
}
