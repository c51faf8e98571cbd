//! Configuration constants.
//!
//! This module defines the constants used throughout the application: backend
//! endpoints and timeouts, preview viewport widths, score thresholds and the
//! page geometry of the printable report.

// Remote analysis backend
/// Default base URL of the analysis backend
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
/// Path of the analysis endpoint, joined onto the backend base URL
pub const ANALYZE_ENDPOINT_PATH: &str = "/api/analyze-newsletter";
/// Timeout for one remote analysis call in seconds
///
/// The backend probes every link and may call an AI provider, so this is
/// deliberately generous. No retries are performed on expiry.
pub const ANALYSIS_TIMEOUT_SECS: u64 = 120;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Maximum number of characters of a non-2xx response body kept in errors
pub const MAX_ERROR_BODY_CHARS: usize = 500;

/// User-Agent sent to the analysis backend.
pub const DEFAULT_USER_AGENT: &str = concat!("newsletter_report/", env!("CARGO_PKG_VERSION"));

/// Environment variable read for the AI API key.
pub const AI_API_KEY_ENV: &str = "NEWSLETTER_AI_API_KEY";

// Preview
/// Viewport width of the desktop preview in CSS pixels
pub const DESKTOP_VIEWPORT_WIDTH: u16 = 600;
/// Viewport width of the mobile preview in CSS pixels
pub const MOBILE_VIEWPORT_WIDTH: u16 = 375;

// Scoring
/// Upper bound of every score term and of the overall score
pub const MAX_SCORE: f64 = 10.0;
/// Overall scores at or above this are shown as good
pub const SCORE_GOOD_THRESHOLD: u8 = 8;
/// Overall scores at or above this (and below good) are shown as fair
pub const SCORE_FAIR_THRESHOLD: u8 = 6;
/// Default threshold for `--fail-on score-below`
pub const DEFAULT_FAIL_UNDER: u8 = 6;

// Inbox preview defaults
pub const DEFAULT_INBOX_SUBJECT: &str = "Newsletter subject";
pub const DEFAULT_INBOX_PREHEADER: &str = "Preview text...";
pub const DEFAULT_INBOX_SENDER: &str = "sender@example.com";

// Exports
/// Prefix of default export filenames (`newsletter-report-<millis>.<ext>`)
pub const EXPORT_FILENAME_PREFIX: &str = "newsletter-report";
/// Date format used in exports; fixed so output never depends on system locale
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Title of every exported report
pub const REPORT_TITLE: &str = "Newsletter Analysis Report";

// Printable document geometry (PDF points, A4 portrait)
pub const PAGE_WIDTH_PT: i64 = 595;
pub const PAGE_HEIGHT_PT: i64 = 842;
/// Left edge of headings
pub const PAGE_MARGIN_LEFT_PT: i64 = 56;
/// Left edge of list items and fields
pub const PAGE_INDENT_PT: i64 = 72;
/// Baseline of the first line on a page
pub const PAGE_MARGIN_TOP_PT: i64 = 70;
/// Nothing is placed below this distance from the bottom edge
pub const PAGE_MARGIN_BOTTOM_PT: i64 = 60;
pub const TITLE_FONT_SIZE: i64 = 20;
pub const HEADING_FONT_SIZE: i64 = 16;
pub const SUBHEADING_FONT_SIZE: i64 = 13;
pub const BODY_FONT_SIZE: i64 = 11;
/// Text never extends past this distance from the right edge
pub const PAGE_MARGIN_RIGHT_PT: i64 = 56;
