//! HTTP implementation of the analysis backend.

use std::sync::Arc;

use url::Url;

use super::backend::AnalysisBackend;
use crate::config::{ANALYZE_ENDPOINT_PATH, MAX_ERROR_BODY_CHARS};
use crate::error_handling::{categorize_reqwest_error, RemoteAnalysisFailure};
use crate::models::{AnalysisRequest, RawAnalysis};

/// Posts analysis requests as JSON to `<backend_url>/api/analyze-newsletter`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Arc<reqwest::Client>,
    endpoint: Url,
}

impl HttpBackend {
    /// Creates a backend for the given base URL.
    ///
    /// A path prefix in `backend_url` is kept (`http://host/prefix` posts to
    /// `http://host/prefix/api/analyze-newsletter`).
    pub fn new(
        client: Arc<reqwest::Client>,
        backend_url: &str,
    ) -> Result<Self, RemoteAnalysisFailure> {
        let joined = format!(
            "{}{}",
            backend_url.trim().trim_end_matches('/'),
            ANALYZE_ENDPOINT_PATH
        );
        let endpoint = Url::parse(&joined).map_err(|e| RemoteAnalysisFailure::InvalidEndpoint {
            url: backend_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(RemoteAnalysisFailure::InvalidEndpoint {
                url: backend_url.to_string(),
                reason: format!("unsupported scheme '{}'", endpoint.scheme()),
            });
        }
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl AnalysisBackend for HttpBackend {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<RawAnalysis, RemoteAnalysisFailure> {
        log::debug!(
            "POST {} ({} characters of HTML, AI {})",
            self.endpoint,
            request.html_content.chars().count(),
            if request.ai_api_key.is_some() {
                "requested"
            } else {
                "not requested"
            }
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteAnalysisFailure::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;
        serde_json::from_slice::<RawAnalysis>(&bytes)
            .map_err(|e| RemoteAnalysisFailure::InvalidResponse(e.to_string()))
    }
}
