//! Link status classification and link panel helpers.

mod category;
mod classify;
mod summary;

pub use category::{LinkCategory, LinkProtocol};
pub use classify::{classify_probe, classify_status_code, ProbeOutcome};
pub use summary::{status_message, StatusCounts};
