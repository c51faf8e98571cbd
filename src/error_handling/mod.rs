//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, remote analysis, export)
//! - Categorization of HTTP client errors into remote analysis failures
//!
//! Remote analysis failures are terminal for the request that raised them and
//! are never retried here; any retry policy belongs to the caller.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{ExportError, InitializationError, RemoteAnalysisFailure};
