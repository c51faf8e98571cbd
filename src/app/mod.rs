//! Results presentation.
//!
//! This module provides the results view model (tabs and panels) and its
//! terminal rendering used by the main application.

pub mod output;
pub mod view;

// Re-export public API
pub use output::{print_results, render_results};
pub use view::{
    section_band, AiPanel, ResultsTab, ResultsView, StatTile, SummaryPanel, TechnicalPanel,
    AI_KEY_HINT,
};
