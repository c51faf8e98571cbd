//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.
//! Logs go to stderr so the rendered results on stdout stay clean.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Dependencies whose own logging is capped regardless of `--log-level`.
///
/// The HTTP stack is chatty at debug level and would bury the session and
/// export messages of this crate.
const DEPENDENCY_FILTERS: &[(&str, LevelFilter)] = &[
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("rustls", LevelFilter::Warn),
    ("lopdf", LevelFilter::Warn),
];

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` directives are read first; `level` then sets the default and
/// the level of the `newsletter_report` crate, so `--log-level` wins over a
/// bare `RUST_LOG=debug`. Directives naming a submodule are more specific and
/// still apply.
///
/// Useful targets:
/// - `newsletter_report::session`: request sequencing, superseded and
///   cancelled analyses, backend failures
/// - `newsletter_report::export`: page breaks and written export paths
/// - `newsletter_report::scoring`: the score terms of each result
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already set.
///
/// # Examples
///
/// ```bash
/// # Follow why an analysis was discarded
/// RUST_LOG=newsletter_report::session=debug newsletter_report newsletter.html
///
/// # See where pages break in the PDF export, as JSON lines
/// RUST_LOG=newsletter_report::export=debug newsletter_report newsletter.html \
///     --format pdf --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);

    builder.filter_level(level);
    for (module, cap) in DEPENDENCY_FILTERS {
        builder.filter_module(module, (*cap).min(level));
    }
    builder.filter_module("newsletter_report", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                let emoji = match level {
                    log::Level::Error => "❌",
                    log::Level::Warn => "⚠️",
                    log::Level::Info => "✔️",
                    log::Level::Debug => "🔍",
                    log::Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // A second initialization (tests, embedding) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}
