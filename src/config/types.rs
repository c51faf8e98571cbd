//! Configuration types.
//!
//! This module defines the enums and structs used for configuration. `Config`
//! is the library-level configuration and has no CLI dependency; the CLI in
//! `config::cli` converts into it.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;

use crate::config::constants::{
    ANALYSIS_TIMEOUT_SECS, DEFAULT_BACKEND_URL, DEFAULT_FAIL_UNDER, DEFAULT_USER_AGENT,
};
use crate::export::ExportFormat;
use crate::preview::ViewMode;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy applied after a successful analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 when the analysis itself succeeded
    Never,
    /// Exit 2 when the report lists at least one critical issue
    CriticalIssues,
    /// Exit 2 when the overall score is below `fail_under`
    ScoreBelow,
}

/// User-supplied analysis settings forwarded to the backend.
///
/// These values are free-form and never validated here; empty strings are
/// treated the same as absent values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisSettings {
    /// API key for the AI critique; without it the AI signal is unavailable
    pub ai_api_key: Option<String>,
    /// Subject line of the newsletter
    pub subject: Option<String>,
    /// Preheader (preview text) of the newsletter
    pub preheader: Option<String>,
    /// Sender address or name
    pub sender: Option<String>,
}

impl AnalysisSettings {
    /// Returns a copy where blank values are replaced by `None`.
    pub fn normalized(&self) -> Self {
        fn non_blank(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        Self {
            ai_api_key: non_blank(&self.ai_api_key),
            subject: non_blank(&self.subject),
            preheader: non_blank(&self.preheader),
            sender: non_blank(&self.sender),
        }
    }

    /// True when a non-blank AI API key is configured.
    pub fn has_ai_key(&self) -> bool {
        self.normalized().ai_api_key.is_some()
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use newsletter_report::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("newsletter.html"),
///     output_dir: PathBuf::from("reports"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTML file to analyze (`-` reads stdin)
    pub input: PathBuf,

    /// Saved backend response to use instead of calling the backend
    pub from_json: Option<PathBuf>,

    /// Base URL of the analysis backend
    pub backend_url: String,

    /// Timeout of the remote analysis call in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Settings forwarded to the backend
    pub settings: AnalysisSettings,

    /// Fixed analysis timestamp (defaults to the time of composition)
    pub analysis_timestamp: Option<DateTime<Utc>>,

    /// Export formats to write
    pub formats: Vec<ExportFormat>,

    /// Directory the exports are written to
    pub output_dir: PathBuf,

    /// Preview viewport
    pub view_mode: ViewMode,

    /// Apply the dark-mode overlay to the preview
    pub dark_mode: bool,

    /// Where to write the sandboxed preview host page (disabled if `None`)
    pub preview_out: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Exit code policy
    pub fail_on: FailOn,

    /// Score threshold for `FailOn::ScoreBelow`
    pub fail_under: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("newsletter.html"),
            from_json: None,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_seconds: ANALYSIS_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            settings: AnalysisSettings::default(),
            analysis_timestamp: None,
            formats: vec![ExportFormat::Markdown],
            output_dir: PathBuf::from("."),
            view_mode: ViewMode::Desktop,
            dark_mode: false,
            preview_out: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
            fail_under: DEFAULT_FAIL_UNDER,
        }
    }
}
