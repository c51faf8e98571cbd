//! Link status classification.

use crate::models::LinkStatus;

/// Outcome of one link reachability probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub url: String,
    pub ok: bool,
    pub status_code: Option<u16>,
    /// Transport error when the probe never got an HTTP response
    pub error: Option<String>,
}

impl ProbeOutcome {
    /// A probe that received an HTTP response.
    pub fn from_status(url: impl Into<String>, status_code: u16) -> Self {
        Self {
            url: url.into(),
            ok: (200..400).contains(&status_code),
            status_code: Some(status_code),
            error: None,
        }
    }

    /// A probe that failed before any HTTP response.
    pub fn from_error(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ok: false,
            status_code: None,
            error: Some(error.into()),
        }
    }
}

/// Classifies a probe outcome; `None` means the probe has not completed yet.
///
/// Rules are applied in order: pending, 404, 2xx/3xx, other 4xx/5xx,
/// transport error, and everything else is a warning. The `ok` flag of the
/// probe is informational only.
pub fn classify_probe(probe: Option<&ProbeOutcome>) -> LinkStatus {
    let Some(probe) = probe else {
        return LinkStatus::Pending;
    };
    match probe.status_code {
        Some(code) => classify_status_code(code),
        None if probe.error.is_some() => LinkStatus::Error,
        None => LinkStatus::Warning,
    }
}

/// Classifies an HTTP status code alone.
pub fn classify_status_code(code: u16) -> LinkStatus {
    match code {
        404 => LinkStatus::Error,
        200..=399 => LinkStatus::Success,
        400..=599 => LinkStatus::Error,
        _ => LinkStatus::Warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_completed_is_pending() {
        assert_eq!(classify_probe(None), LinkStatus::Pending);
    }

    #[test]
    fn test_404_is_error() {
        let probe = ProbeOutcome::from_status("https://example.com/gone", 404);
        assert_eq!(classify_probe(Some(&probe)), LinkStatus::Error);
    }

    #[test]
    fn test_404_is_error_even_if_marked_ok() {
        let probe = ProbeOutcome {
            url: "https://example.com/gone".to_string(),
            ok: true,
            status_code: Some(404),
            error: None,
        };
        assert_eq!(classify_probe(Some(&probe)), LinkStatus::Error);
    }

    #[test]
    fn test_success_range() {
        for code in [200, 204, 301, 302, 399] {
            assert_eq!(classify_status_code(code), LinkStatus::Success, "code {code}");
        }
    }

    #[test]
    fn test_error_ranges() {
        for code in [400, 401, 403, 410, 429, 499, 500, 502, 503, 599] {
            assert_eq!(classify_status_code(code), LinkStatus::Error, "code {code}");
        }
    }

    #[test]
    fn test_unclassified_codes_are_warnings() {
        for code in [100, 101, 199, 600, 999] {
            assert_eq!(classify_status_code(code), LinkStatus::Warning, "code {code}");
        }
    }

    #[test]
    fn test_transport_error_without_code_is_error() {
        let probe = ProbeOutcome::from_error("https://down.example", "dns error");
        assert_eq!(classify_probe(Some(&probe)), LinkStatus::Error);
    }

    #[test]
    fn test_completed_without_code_or_error_is_warning() {
        let probe = ProbeOutcome {
            url: "https://example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(classify_probe(Some(&probe)), LinkStatus::Warning);
    }

    #[test]
    fn test_status_code_wins_over_error() {
        let probe = ProbeOutcome {
            url: "https://example.com".to_string(),
            ok: false,
            status_code: Some(200),
            error: Some("late reset".to_string()),
        };
        assert_eq!(classify_probe(Some(&probe)), LinkStatus::Success);
    }
}
