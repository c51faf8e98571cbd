//! Terminal rendering of the results view.

use colored::{ColoredString, Colorize};

use super::view::{section_band, AiPanel, ResultsView};
use crate::links::{status_message, LinkCategory};
use crate::models::{LinkRecord, LinkStatus};
use crate::preview::InboxPreview;
use crate::report::OutlineEntry;
use crate::scoring::ScoreBand;

fn paint(text: &str, band: ScoreBand) -> ColoredString {
    match band {
        ScoreBand::Good => text.green(),
        ScoreBand::Fair => text.yellow(),
        ScoreBand::Poor => text.red(),
    }
}

fn status_icon(status: LinkStatus) -> ColoredString {
    match status {
        LinkStatus::Success => "✓".green(),
        LinkStatus::Warning => "!".yellow(),
        LinkStatus::Error => "✗".red(),
        LinkStatus::Pending => "…".dimmed(),
    }
}

/// Renders the results view, links and inbox previews as terminal text.
pub fn render_results(
    view: &ResultsView,
    links: &[LinkRecord],
    inbox: &[InboxPreview],
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "{} {}",
        "Overall score:".bold(),
        paint(&format!("{}/10", view.score), view.band())
    ));
    lines.push(String::new());

    // Summary
    lines.push("Summary".bold().underline().to_string());
    for tile in &view.summary.tiles {
        lines.push(format!("  {}: {}", tile.label, tile.value));
    }
    if view.summary.all_clear {
        lines.push(format!(
            "  {}",
            "Ready to send: no critical issues or warnings detected.".green()
        ));
    }
    for issue in &view.summary.critical_issues {
        lines.push(format!("  {} {}", "✗".red(), issue));
    }
    for warning in &view.summary.warnings {
        lines.push(format!("  {} {}", "!".yellow(), warning));
    }
    lines.push(String::new());

    // Links
    if !links.is_empty() {
        let counts = view
            .link_counts
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(status, count)| format!("{count} {status}"))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("{} ({})", "Links".bold().underline(), counts));
        for link in links {
            let mut line = format!(
                "  {} {} {}",
                status_icon(link.status()),
                link.url,
                status_message(link).dimmed()
            );
            if link.category() == LinkCategory::Web {
                line.push_str(&format!(" [{}]", link.protocol()));
            } else {
                line.push_str(&format!(" [{}]", link.category()));
            }
            lines.push(line);
        }
        lines.push(String::new());
    }

    // AI
    lines.push("AI Analysis".bold().underline().to_string());
    match &view.ai {
        AiPanel::Available { sections } => {
            for section in sections {
                let heading = section.heading();
                let heading = match section_band(section) {
                    Some(band) => paint(&heading, band).to_string(),
                    None => heading,
                };
                lines.push(format!("  {}", heading));
                for entry in &section.entries {
                    match entry {
                        OutlineEntry::Field { label, value } => {
                            lines.push(format!("    {}: {}", label, value));
                        }
                        OutlineEntry::List { label, items } => {
                            if let Some(label) = label {
                                lines.push(format!("    {}:", label));
                            }
                            for item in items {
                                lines.push(format!("      - {}", item));
                            }
                        }
                    }
                }
            }
        }
        AiPanel::Degraded { reason, hint } => {
            lines.push(format!("  {} {}", "AI analysis unavailable:".yellow(), reason));
            lines.push(format!("  {}", hint.dimmed()));
        }
    }
    lines.push(String::new());

    // Technical
    lines.push("Technical".bold().underline().to_string());
    lines.push(format!(
        "  HTML size: {} characters",
        view.technical.html_size_chars
    ));
    lines.push(format!(
        "  Analyzed at: {}",
        view.technical.analysis_timestamp
    ));
    if view.technical.clean_html {
        lines.push(format!("  {}", "No HTML issues detected.".green()));
    }
    for issue in &view.technical.html_issues {
        lines.push(format!("  {} {}", "!".yellow(), issue));
    }

    // Inbox
    if !inbox.is_empty() {
        lines.push(String::new());
        lines.push("Inbox preview".bold().underline().to_string());
        for preview in inbox {
            lines.push(format!(
                "  [{}] ({}) {} | {} | {}",
                preview.client,
                preview.avatar_initial,
                preview.sender,
                preview.subject.bold(),
                preview.preheader.dimmed()
            ));
        }
    }

    lines.join("\n")
}

/// Prints the rendered results to stdout.
pub fn print_results(view: &ResultsView, links: &[LinkRecord], inbox: &[InboxPreview]) {
    println!("{}", render_results(view, links, inbox));
}
