//! Error categorization.
//!
//! Maps transport-level `reqwest` errors onto `RemoteAnalysisFailure`.

use super::types::RemoteAnalysisFailure;

/// Categorizes a `reqwest::Error` raised while calling the analysis backend.
///
/// Status errors keep their HTTP code; body decoding failures become
/// `InvalidResponse`; everything else (connect, timeout, request building) is a
/// `Transport` failure whose message names the kind of error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> RemoteAnalysisFailure {
    if let Some(status) = error.status() {
        return RemoteAnalysisFailure::Status {
            status: status.as_u16(),
            body: error.to_string(),
        };
    }

    if error.is_decode() {
        return RemoteAnalysisFailure::InvalidResponse(error.to_string());
    }

    let kind = if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connect error"
    } else if error.is_builder() {
        "request builder error"
    } else if error.is_redirect() {
        "redirect error"
    } else if error.is_body() {
        "body error"
    } else if error.is_request() {
        "request error"
    } else {
        "other error"
    };
    RemoteAnalysisFailure::Transport(format!("{kind}: {error}"))
}
