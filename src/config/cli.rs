//! Command-line options.
//!
//! `Cli` is generated by `clap` from the field attributes and converts into the
//! library `Config`.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;

use crate::config::constants::{
    AI_API_KEY_ENV, ANALYSIS_TIMEOUT_SECS, DEFAULT_BACKEND_URL, DEFAULT_FAIL_UNDER,
    DEFAULT_USER_AGENT,
};
use crate::config::types::{AnalysisSettings, Config, FailOn, LogFormat, LogLevel};
use crate::export::ExportFormat;
use crate::preview::ViewMode;

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Analyze a newsletter and write a Markdown report to the current directory
/// newsletter_report newsletter.html
///
/// # With AI critique, both export formats and a mobile dark-mode preview
/// NEWSLETTER_AI_API_KEY=sk-... newsletter_report newsletter.html \
///     --format markdown --format pdf --view mobile --dark --preview-out preview.html
///
/// # Re-export a saved backend response with a pinned timestamp
/// newsletter_report - --from-json response.json --timestamp 2024-05-01T09:00:00Z
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "newsletter_report",
    about = "Scores an HTML newsletter from link, HTML and AI checks and exports the report."
)]
pub struct Cli {
    /// HTML file to analyze (`-` reads stdin)
    #[arg(value_parser)]
    pub input: PathBuf,

    /// Base URL of the analysis backend
    #[arg(long, default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Use a saved backend response instead of calling the backend
    #[arg(long)]
    pub from_json: Option<PathBuf>,

    /// API key enabling the AI critique
    #[arg(long, env = AI_API_KEY_ENV, hide_env_values = true)]
    pub ai_api_key: Option<String>,

    /// Newsletter subject line
    #[arg(long)]
    pub subject: Option<String>,

    /// Newsletter preheader text
    #[arg(long)]
    pub preheader: Option<String>,

    /// Newsletter sender
    #[arg(long)]
    pub sender: Option<String>,

    /// Pin the analysis timestamp (RFC 3339) for reproducible exports
    #[arg(long)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Export format (repeatable): markdown|pdf
    #[arg(long = "format", value_enum, default_values_t = vec![ExportFormat::Markdown])]
    pub formats: Vec<ExportFormat>,

    /// Directory the exports are written to
    #[arg(long, value_parser, default_value = ".")]
    pub output_dir: PathBuf,

    /// Preview viewport: desktop|mobile
    #[arg(long = "view", value_enum, default_value_t = ViewMode::Desktop)]
    pub view_mode: ViewMode,

    /// Apply the dark-mode overlay to the preview
    #[arg(long = "dark")]
    pub dark_mode: bool,

    /// Write a sandboxed preview host page to this path
    #[arg(long, value_parser)]
    pub preview_out: Option<PathBuf>,

    /// Timeout of the remote analysis call in seconds
    #[arg(long, default_value_t = ANALYSIS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Exit code policy: never|critical-issues|score-below
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,

    /// Score threshold used by `--fail-on score-below`
    #[arg(long, default_value_t = DEFAULT_FAIL_UNDER, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub fail_under: u8,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: cli.input,
            from_json: cli.from_json,
            backend_url: cli.backend_url,
            timeout_seconds: cli.timeout_seconds,
            user_agent: cli.user_agent,
            settings: AnalysisSettings {
                ai_api_key: cli.ai_api_key,
                subject: cli.subject,
                preheader: cli.preheader,
                sender: cli.sender,
            }
            .normalized(),
            analysis_timestamp: cli.timestamp,
            formats: cli.formats,
            output_dir: cli.output_dir,
            view_mode: cli.view_mode,
            dark_mode: cli.dark_mode,
            preview_out: cli.preview_out,
            log_level: cli.log_level,
            log_format: cli.log_format,
            fail_on: cli.fail_on,
            fail_under: cli.fail_under,
        }
    }
}
