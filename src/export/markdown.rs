//! Markdown export.
//!
//! Output is a pure function of the outline: identical input and timestamp
//! always yield byte-identical text.

use std::fmt::Write as _;

use crate::report::{OutlineEntry, ReportOutline, SectionLevel};

/// Renders the outline as Markdown.
pub fn render_markdown(outline: &ReportOutline) -> String {
    let mut md = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(md, "# {}", outline.title);
    md.push('\n');
    let _ = writeln!(md, "**Date:** {}  ", outline.date);
    let _ = writeln!(md, "**Overall score:** {}/10", outline.score);

    for section in &outline.sections {
        let marker = match section.level {
            SectionLevel::Section => "##",
            SectionLevel::Subsection => "###",
        };
        md.push('\n');
        let _ = writeln!(md, "{} {}", marker, section.heading());

        let mut previous: Option<&OutlineEntry> = None;
        for entry in &section.entries {
            // Consecutive fields form a single list
            let continues_fields = matches!(
                (previous, entry),
                (Some(OutlineEntry::Field { .. }), OutlineEntry::Field { .. })
            );
            if !continues_fields {
                md.push('\n');
            }
            match entry {
                OutlineEntry::Field { label, value } => {
                    let _ = writeln!(md, "- **{}:** {}", label, single_line(value));
                }
                OutlineEntry::List { label, items } => {
                    if let Some(label) = label {
                        let _ = writeln!(md, "**{}:**", label);
                        md.push('\n');
                    }
                    for item in items {
                        let _ = writeln!(md, "- {}", single_line(item));
                    }
                }
            }
            previous = Some(entry);
        }
    }

    md
}

/// Keeps an item on one Markdown line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
