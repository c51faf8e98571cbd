//! Report exports.
//!
//! This module renders a composed analysis result as Markdown text or as a
//! paginated PDF document. Both formats are rendered from the same
//! `report::ReportOutline`, and neither mutates the result.

mod document;
mod markdown;
mod metrics;
mod pdf;
mod types;
mod writer;

pub use document::{layout_document, DocumentLayout, FontStyle, LineRole, Page, PlacedLine};
pub use markdown::render_markdown;
pub use pdf::render_pdf;
pub use types::{default_filename, ExportFormat};
pub use writer::{export_document, export_markdown, render_export, write_export, write_exports};
