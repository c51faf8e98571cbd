//! newsletter_report library: report aggregation and export for HTML newsletters
//!
//! This library combines three independently computed signals about an email
//! newsletter (link reachability, structural HTML issues and an optional AI
//! critique) into one canonical report, scores it from 0 to 10 and exports it
//! as Markdown or as a paginated PDF.
//!
//! # Example
//!
//! ```no_run
//! use newsletter_report::{run_report, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: PathBuf::from("newsletter.html"),
//!     output_dir: PathBuf::from("reports"),
//!     ..Default::default()
//! };
//!
//! let report = run_report(config).await?;
//! println!("Overall score {}/10, exports: {:?}", report.score, report.exports);
//! # Ok(())
//! # }
//! ```
//!
//! Scoring, composition and export are synchronous and pure; only the remote
//! analysis call needs a Tokio runtime.

pub mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod links;
pub mod models;
pub mod preview;
pub mod report;
mod run;
pub mod scoring;
pub mod session;

// Re-export public API
pub use config::{AnalysisSettings, Cli, Config, FailOn, LogFormat, LogLevel};
pub use error_handling::{ExportError, InitializationError, RemoteAnalysisFailure};
pub use export::ExportFormat;
pub use models::{AnalysisResult, Report};
pub use preview::ViewMode;
pub use run::{evaluate_exit_code, run_report, RunReport};
pub use scoring::{overall_score, OverallScore};
