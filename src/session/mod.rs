//! Analysis session.
//!
//! A session owns the current `AnalysisResult` and guarantees that a stale
//! response never replaces a newer one:
//! - every request gets a sequence number from a monotonically increasing counter,
//! - starting a request cancels the one still in flight,
//! - a response is applied only if its sequence number is still the latest
//!   issued and newer than the applied one, so out-of-order completion is
//!   harmless even when cancellation loses the race.

mod backend;
mod http;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

pub use backend::{AnalysisBackend, RecordedBackend};
pub use http::HttpBackend;

use crate::config::AnalysisSettings;
use crate::error_handling::RemoteAnalysisFailure;
use crate::models::{AnalysisRequest, AnalysisResult, RawAnalysis};
use crate::report::compose_from_raw;

/// What happened to one analysis request.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// The result is now the session's current result
    Applied(Arc<AnalysisResult>),
    /// A newer request was issued; this one was cancelled or discarded
    Superseded { sequence: u64 },
}

impl AnalysisOutcome {
    pub fn applied(&self) -> Option<&Arc<AnalysisResult>> {
        match self {
            AnalysisOutcome::Applied(result) => Some(result),
            AnalysisOutcome::Superseded { .. } => None,
        }
    }
}

struct InFlight {
    sequence: u64,
    cancel: CancellationToken,
}

struct Applied {
    sequence: u64,
    result: Arc<AnalysisResult>,
}

/// Single active analysis session.
pub struct AnalysisSession<B> {
    backend: B,
    settings: AnalysisSettings,
    fixed_timestamp: Option<DateTime<Utc>>,
    latest_sequence: AtomicU64,
    in_flight: Mutex<Option<InFlight>>,
    current: RwLock<Option<Applied>>,
}

impl<B: AnalysisBackend> AnalysisSession<B> {
    pub fn new(backend: B, settings: AnalysisSettings) -> Self {
        Self {
            backend,
            settings: settings.normalized(),
            fixed_timestamp: None,
            latest_sequence: AtomicU64::new(0),
            in_flight: Mutex::new(None),
            current: RwLock::new(None),
        }
    }

    /// Stamps every composed report with `timestamp` instead of the current time.
    pub fn with_fixed_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.fixed_timestamp = Some(timestamp);
        self
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// The most recently applied result.
    pub fn current(&self) -> Option<Arc<AnalysisResult>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|applied| Arc::clone(&applied.result))
    }

    pub fn latest_sequence(&self) -> u64 {
        self.latest_sequence.load(Ordering::SeqCst)
    }

    /// Runs one analysis of `html` and applies the result unless superseded.
    ///
    /// # Errors
    ///
    /// Returns the backend failure when this is still the latest request.
    /// Failures of superseded requests are discarded and reported as
    /// `AnalysisOutcome::Superseded`.
    pub async fn analyze(&self, html: &str) -> Result<AnalysisOutcome, RemoteAnalysisFailure> {
        if html.trim().is_empty() {
            return Err(RemoteAnalysisFailure::EmptyContent);
        }

        let sequence = self.latest_sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let cancel = CancellationToken::new();
        {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(previous) = in_flight.replace(InFlight {
                sequence,
                cancel: cancel.clone(),
            }) {
                log::debug!(
                    "Request {} supersedes in-flight request {}",
                    sequence,
                    previous.sequence
                );
                previous.cancel.cancel();
            }
        }

        let request = AnalysisRequest::new(html, &self.settings);
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(RemoteAnalysisFailure::Cancelled { sequence }),
            response = self.backend.analyze(&request) => response,
        };

        {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            if in_flight.as_ref().is_some_and(|f| f.sequence == sequence) {
                *in_flight = None;
            }
        }

        match response {
            Ok(raw) => Ok(self.apply(sequence, raw)),
            Err(RemoteAnalysisFailure::Cancelled { .. }) => {
                log::debug!("Request {} cancelled", sequence);
                Ok(AnalysisOutcome::Superseded { sequence })
            }
            Err(failure) if sequence != self.latest_sequence() => {
                log::warn!(
                    "Discarding {} of superseded request {}: {}",
                    failure.as_str(),
                    sequence,
                    failure
                );
                Ok(AnalysisOutcome::Superseded { sequence })
            }
            Err(failure) => {
                log::error!("Analysis request {} failed: {}", sequence, failure);
                Err(failure)
            }
        }
    }

    /// Composes and applies a response if `sequence` is still the latest.
    pub(crate) fn apply(&self, sequence: u64, raw: RawAnalysis) -> AnalysisOutcome {
        let timestamp = self.fixed_timestamp.unwrap_or_else(Utc::now);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);

        let applied_sequence = current.as_ref().map_or(0, |applied| applied.sequence);
        if sequence != self.latest_sequence() || sequence <= applied_sequence {
            log::warn!(
                "Discarding stale response {} (latest {}, applied {})",
                sequence,
                self.latest_sequence(),
                applied_sequence
            );
            return AnalysisOutcome::Superseded { sequence };
        }

        let result = Arc::new(compose_from_raw(raw, timestamp));
        log::info!(
            "Applied analysis {}: {} links, {} HTML issues",
            sequence,
            result.report().total_links,
            result.html_issues().len()
        );
        *current = Some(Applied {
            sequence,
            result: Arc::clone(&result),
        });
        AnalysisOutcome::Applied(result)
    }
}
