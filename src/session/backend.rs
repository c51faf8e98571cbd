//! The remote analysis collaborator.

use std::future::Future;

use crate::error_handling::RemoteAnalysisFailure;
use crate::models::{AnalysisRequest, RawAnalysis};

/// Performs link probing, HTML linting and AI critique for one newsletter.
///
/// This is the only suspending operation of an analysis. Implementations must
/// not retry: a failure is terminal for the request.
pub trait AnalysisBackend: Send + Sync {
    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<RawAnalysis, RemoteAnalysisFailure>> + Send;
}

/// Replays a previously saved backend response.
#[derive(Debug, Clone)]
pub struct RecordedBackend {
    response: RawAnalysis,
}

impl RecordedBackend {
    pub fn new(response: RawAnalysis) -> Self {
        Self { response }
    }

    /// Parses a saved response body.
    pub fn from_json(json: &str) -> Result<Self, RemoteAnalysisFailure> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|e| RemoteAnalysisFailure::InvalidResponse(e.to_string()))
    }
}

impl AnalysisBackend for RecordedBackend {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<RawAnalysis, RemoteAnalysisFailure> {
        log::debug!(
            "Replaying recorded analysis for {} characters of HTML",
            request.html_content.chars().count()
        );
        Ok(self.response.clone())
    }
}
