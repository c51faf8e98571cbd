//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, thresholds, page geometry)
//! - Library configuration types
//! - CLI option parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::Cli;
pub use constants::*;
pub use types::{AnalysisSettings, Config, FailOn, LogFormat, LogLevel};
