//! End-to-end report run used by the binary.
//!
//! Reads the newsletter, obtains the analysis (remote backend or a saved
//! response), composes the result, writes the requested exports and the
//! optional sandboxed preview.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use log::info;
use tokio::io::AsyncReadExt;

use crate::app::ResultsView;
use crate::config::{Config, FailOn};
use crate::export::write_exports;
use crate::initialization::init_client;
use crate::models::AnalysisResult;
use crate::preview::{present, IsolatedSurface, SandboxedFrameWriter};
use crate::scoring::{overall_score, OverallScore};
use crate::session::{AnalysisBackend, AnalysisOutcome, AnalysisSession, HttpBackend, RecordedBackend};

/// Results of one report run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The composed analysis
    pub result: Arc<AnalysisResult>,
    /// Overall score of `result`
    pub score: OverallScore,
    /// View model for terminal output
    pub view: ResultsView,
    /// Export files written, in request order
    pub exports: Vec<PathBuf>,
    /// Preview host page, when requested
    pub preview: Option<PathBuf>,
}

/// Runs one analysis with the provided configuration.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the analysis fails (the
/// `RemoteAnalysisFailure` is kept as the error source), or an output file
/// cannot be written. No partial report is produced on analysis failure.
pub async fn run_report(config: Config) -> Result<RunReport> {
    let html = read_input(&config.input).await?;
    info!(
        "Analyzing {} ({} characters)",
        display_input(&config.input),
        html.chars().count()
    );

    let result = match &config.from_json {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read saved analysis {}", path.display()))?;
            let backend = RecordedBackend::from_json(&json)
                .with_context(|| format!("Invalid saved analysis {}", path.display()))?;
            analyze_with(backend, &config, &html).await?
        }
        None => {
            let client = init_client(&config).context("Failed to initialize HTTP client")?;
            let backend = HttpBackend::new(client, &config.backend_url)?;
            analyze_with(backend, &config, &html).await?
        }
    };

    let score = overall_score(&result);
    let view = ResultsView::build(&result, &html);
    info!(
        "Overall score {}/10 ({} critical issues, {} warnings)",
        score,
        result.report().critical_issues.len(),
        result.report().warnings.len()
    );

    let exports = write_exports(&result, &config.formats, &config.output_dir)
        .context("Failed to write exports")?;

    let preview = match &config.preview_out {
        Some(path) => {
            let writer = SandboxedFrameWriter::new(path);
            writer
                .render(&html, &present(config.view_mode, config.dark_mode))
                .with_context(|| format!("Failed to write preview {}", path.display()))?;
            Some(writer.path().to_path_buf())
        }
        None => None,
    };

    Ok(RunReport {
        result,
        score,
        view,
        exports,
        preview,
    })
}

async fn analyze_with<B: AnalysisBackend>(
    backend: B,
    config: &Config,
    html: &str,
) -> Result<Arc<AnalysisResult>> {
    let mut session = AnalysisSession::new(backend, config.settings.clone());
    if let Some(timestamp) = config.analysis_timestamp {
        session = session.with_fixed_timestamp(timestamp);
    }
    match session.analyze(html).await.context("Analysis failed")? {
        AnalysisOutcome::Applied(result) => Ok(result),
        AnalysisOutcome::Superseded { sequence } => {
            bail!("Analysis request {} was superseded", sequence)
        }
    }
}

async fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut html = String::new();
        tokio::io::stdin()
            .read_to_string(&mut html)
            .await
            .context("Failed to read newsletter HTML from stdin")?;
        return Ok(html);
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read newsletter HTML {}", path.display()))
}

fn display_input(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

/// Exit code for a successful run under the given policy.
///
/// Runtime failures are not covered here; the binary exits 1 for them.
pub fn evaluate_exit_code(fail_on: FailOn, fail_under: u8, report: &RunReport) -> i32 {
    match fail_on {
        FailOn::Never => 0,
        FailOn::CriticalIssues => {
            if report.result.report().critical_issues.is_empty() {
                0
            } else {
                2
            }
        }
        FailOn::ScoreBelow => {
            if report.score.value() < fail_under {
                2
            } else {
                0
            }
        }
    }
}
