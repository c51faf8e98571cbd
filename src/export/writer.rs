//! Rendering analysis results to export bytes and files.

use std::path::{Path, PathBuf};

use crate::error_handling::ExportError;
use crate::models::AnalysisResult;
use crate::report::ReportOutline;

use super::document::layout_document;
use super::markdown::render_markdown;
use super::pdf::render_pdf;
use super::types::{default_filename, ExportFormat};

/// Renders the Markdown export of a result.
pub fn export_markdown(result: &AnalysisResult) -> String {
    render_markdown(&ReportOutline::from_result(result))
}

/// Renders the printable PDF export of a result.
pub fn export_document(result: &AnalysisResult) -> Result<Vec<u8>, ExportError> {
    render_pdf(&layout_document(&ReportOutline::from_result(result)))
}

/// Renders a result in the given format.
pub fn render_export(result: &AnalysisResult, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Markdown => Ok(export_markdown(result).into_bytes()),
        ExportFormat::Pdf => export_document(result),
    }
}

/// Writes one export into `output_dir` under its default filename.
///
/// Returns the path of the written file. An existing file with the same name
/// is overwritten.
pub fn write_export(
    result: &AnalysisResult,
    format: ExportFormat,
    output_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let bytes = render_export(result, format)?;
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(default_filename(
        format,
        result.report().analysis_timestamp,
    ));
    std::fs::write(&path, &bytes)?;
    log::info!(
        "Wrote {:?} export ({} bytes) to {}",
        format,
        bytes.len(),
        path.display()
    );
    Ok(path)
}

/// Writes every requested format; duplicate formats are written once.
pub fn write_exports(
    result: &AnalysisResult,
    formats: &[ExportFormat],
    output_dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::with_capacity(formats.len());
    let mut seen = Vec::with_capacity(formats.len());
    for &format in formats {
        if seen.contains(&format) {
            continue;
        }
        seen.push(format);
        written.push(write_export(result, format, output_dir)?);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::compose_result;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn result() -> AnalysisResult {
        compose_result(
            vec![],
            vec![],
            None,
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_write_exports_creates_files() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("reports");
        let paths = write_exports(
            &result(),
            &[ExportFormat::Markdown, ExportFormat::Pdf, ExportFormat::Markdown],
            &out,
        )
        .unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(
            paths[0].file_name().unwrap(),
            "newsletter-report-1714554000000.md"
        );
        let md = std::fs::read_to_string(&paths[0]).unwrap();
        assert!(md.starts_with("# Newsletter Analysis Report\n"));
        let pdf = std::fs::read(&paths[1]).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_write_into_file_path_fails_with_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        let err = write_export(&result(), ExportFormat::Markdown, &blocker).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
