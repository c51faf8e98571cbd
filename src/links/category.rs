//! Informational link categories; never used for status or scoring.

use strum_macros::{AsRefStr, Display};

/// Kind of link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
pub enum LinkCategory {
    Web,
    Email,
    Phone,
}

impl LinkCategory {
    pub fn from_url(url: &str) -> Self {
        let url = url.trim_start();
        if has_scheme(url, "mailto:") {
            LinkCategory::Email
        } else if has_scheme(url, "tel:") {
            LinkCategory::Phone
        } else {
            LinkCategory::Web
        }
    }
}

/// Transport security of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
pub enum LinkProtocol {
    #[strum(serialize = "HTTPS")]
    Secure,
    #[strum(serialize = "HTTP")]
    Insecure,
    #[strum(serialize = "Other")]
    Other,
}

impl LinkProtocol {
    pub fn from_url(url: &str) -> Self {
        let url = url.trim_start();
        if has_scheme(url, "https:") {
            LinkProtocol::Secure
        } else if has_scheme(url, "http:") {
            LinkProtocol::Insecure
        } else {
            LinkProtocol::Other
        }
    }

    pub fn is_secure(self) -> bool {
        self == LinkProtocol::Secure
    }
}

fn has_scheme(url: &str, scheme: &str) -> bool {
    url.get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        assert_eq!(
            LinkCategory::from_url("mailto:hello@example.com"),
            LinkCategory::Email
        );
        assert_eq!(LinkCategory::from_url("tel:+33123456789"), LinkCategory::Phone);
        assert_eq!(
            LinkCategory::from_url("https://example.com"),
            LinkCategory::Web
        );
        assert_eq!(LinkCategory::from_url("MAILTO:x@y.z"), LinkCategory::Email);
        assert_eq!(LinkCategory::from_url("#anchor"), LinkCategory::Web);
    }

    #[test]
    fn test_protocol() {
        assert_eq!(
            LinkProtocol::from_url("https://example.com"),
            LinkProtocol::Secure
        );
        assert_eq!(
            LinkProtocol::from_url("http://example.com"),
            LinkProtocol::Insecure
        );
        assert_eq!(
            LinkProtocol::from_url("mailto:a@b.c"),
            LinkProtocol::Other
        );
        assert_eq!(LinkProtocol::from_url("ht"), LinkProtocol::Other);
        assert!(LinkProtocol::Secure.is_secure());
        assert_eq!(LinkProtocol::Insecure.to_string(), "HTTP");
    }

    #[test]
    fn test_multibyte_url_does_not_panic() {
        assert_eq!(LinkProtocol::from_url("é"), LinkProtocol::Other);
        assert_eq!(LinkCategory::from_url("日本"), LinkCategory::Web);
    }
}
