//! Error type definitions.
//!
//! AI unavailability and missing AI sub-fields are deliberately absent here:
//! both are expected states of an analysis (see `models::AiOutcome`), not
//! failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Terminal failure of one remote analysis request.
///
/// Surfaced to the user as a blocking error; no partial report is produced.
/// Nothing in this crate retries on these.
#[derive(Error, Debug)]
pub enum RemoteAnalysisFailure {
    /// The newsletter markup was empty or whitespace only.
    #[error("Newsletter HTML is empty")]
    EmptyContent,

    /// The configured backend URL could not be joined with the endpoint path.
    #[error("Invalid backend URL {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// The request never produced an HTTP response (connect, timeout, ...).
    #[error("Analysis request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("Analysis backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The backend answered 2xx but the body is not a valid analysis result.
    #[error("Invalid analysis response: {0}")]
    InvalidResponse(String),

    /// The request was cancelled because a newer analysis superseded it.
    #[error("Analysis request {sequence} was superseded by a newer request")]
    Cancelled { sequence: u64 },
}

impl RemoteAnalysisFailure {
    /// Short category name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteAnalysisFailure::EmptyContent => "empty content",
            RemoteAnalysisFailure::InvalidEndpoint { .. } => "invalid endpoint",
            RemoteAnalysisFailure::Transport(_) => "transport error",
            RemoteAnalysisFailure::Status { .. } => "backend status error",
            RemoteAnalysisFailure::InvalidResponse(_) => "invalid response",
            RemoteAnalysisFailure::Cancelled { .. } => "cancelled",
        }
    }
}

/// Error types for report exports.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing the export file failed.
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the printable document failed.
    #[error("PDF generation error: {0}")]
    Pdf(String),
}
