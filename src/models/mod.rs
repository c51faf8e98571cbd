//! Data models for newsletter analysis.
//!
//! Domain types (`LinkRecord`, `AiOutcome`, `Report`, `AnalysisResult`) are kept
//! apart from the wire shapes of the analysis backend (`RawAnalysis`,
//! `AnalysisRequest`) so that backend quirks never leak into scoring or export.

mod ai;
mod analysis;
mod link;
mod wire;

pub use ai::{
    AiAnalysis, AiOutcome, CtaEvaluation, Readability, SpellingGrammar, Structure,
    SubjectPreheader,
};
pub use analysis::{AnalysisResult, HtmlIssue, Report};
pub use link::{LinkRecord, LinkStatus};
pub use wire::{AnalysisRequest, RawAnalysis, RawLink};
