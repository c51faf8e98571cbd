//! Page layout of the printable document.
//!
//! Layout is computed separately from PDF encoding so pagination can be
//! inspected and tested directly. Coordinates are PDF points measured from the
//! top edge of the page; the writer flips them.
//!
//! Pagination rules:
//! - a block that would cross the bottom margin starts on a new page,
//! - a heading is kept together with the first entry below it,
//! - a list label is kept together with its first item,
//! - each list item (with its wrapped lines) is one block, so long lists
//!   break between items,
//! - a block taller than a whole page is split line by line.
//!
//! Lines are wrapped by measured Helvetica width so every line ends inside
//! the right margin.

use super::metrics::{char_width, text_width};
use crate::config::{
    BODY_FONT_SIZE, HEADING_FONT_SIZE, PAGE_HEIGHT_PT, PAGE_INDENT_PT, PAGE_MARGIN_BOTTOM_PT,
    PAGE_MARGIN_LEFT_PT, PAGE_MARGIN_RIGHT_PT, PAGE_MARGIN_TOP_PT, PAGE_WIDTH_PT,
    SUBHEADING_FONT_SIZE, TITLE_FONT_SIZE,
};
use crate::report::{OutlineEntry, ReportOutline, SectionLevel};

const BULLET: &str = "\u{2022} ";
/// Horizontal offset of wrapped item lines, aligned after the bullet
const CONTINUATION_INDENT_PT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// What a laid-out line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Title,
    Meta,
    Heading,
    Subheading,
    Field,
    ListLabel,
    Item,
    /// Wrapped item line starting after a space
    ItemContinuation,
    /// Wrapped item line continuing a word split at the previous line end
    ItemFragment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    pub role: LineRole,
    pub font: FontStyle,
    pub size: i64,
    pub x: i64,
    /// Baseline distance from the top edge
    pub baseline: i64,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// The document split into pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLayout {
    pub pages: Vec<Page>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Section and subsection headings in document order.
    pub fn section_labels(&self) -> Vec<String> {
        self.lines()
            .filter(|line| matches!(line.role, LineRole::Heading | LineRole::Subheading))
            .map(|line| line.text.clone())
            .collect()
    }

    /// List items in document order with wrapped lines rejoined.
    pub fn items(&self) -> Vec<String> {
        let mut items: Vec<String> = Vec::new();
        for line in self.lines() {
            match line.role {
                LineRole::Item => {
                    items.push(line.text.trim_start_matches(BULLET).to_string());
                }
                LineRole::ItemContinuation => {
                    if let Some(last) = items.last_mut() {
                        last.push(' ');
                        last.push_str(&line.text);
                    }
                }
                LineRole::ItemFragment => {
                    if let Some(last) = items.last_mut() {
                        last.push_str(&line.text);
                    }
                }
                _ => {}
            }
        }
        items
    }

    fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flat_map(|page| page.lines.iter())
    }
}

/// A line before placement.
#[derive(Debug, Clone)]
struct LineSpec {
    role: LineRole,
    font: FontStyle,
    size: i64,
    x: i64,
    space_before: i64,
    text: String,
}

impl LineSpec {
    fn new(role: LineRole, text: impl Into<String>) -> Self {
        let (font, size, x, space_before) = match role {
            LineRole::Title => (FontStyle::Bold, TITLE_FONT_SIZE, PAGE_MARGIN_LEFT_PT, 0),
            LineRole::Meta => (FontStyle::Regular, BODY_FONT_SIZE, PAGE_MARGIN_LEFT_PT, 0),
            LineRole::Heading => (FontStyle::Bold, HEADING_FONT_SIZE, PAGE_MARGIN_LEFT_PT, 14),
            LineRole::Subheading => (FontStyle::Bold, SUBHEADING_FONT_SIZE, PAGE_MARGIN_LEFT_PT, 8),
            LineRole::Field | LineRole::Item => (FontStyle::Regular, BODY_FONT_SIZE, PAGE_INDENT_PT, 0),
            LineRole::ListLabel => (FontStyle::Bold, BODY_FONT_SIZE, PAGE_INDENT_PT, 4),
            LineRole::ItemContinuation | LineRole::ItemFragment => (
                FontStyle::Regular,
                BODY_FONT_SIZE,
                PAGE_INDENT_PT + CONTINUATION_INDENT_PT,
                0,
            ),
        };
        Self {
            role,
            font,
            size,
            x,
            space_before,
            text: text.into(),
        }
    }

    fn spaced(mut self, space_before: i64) -> Self {
        self.space_before = space_before;
        self
    }
}

type Block = Vec<LineSpec>;

fn leading(size: i64) -> i64 {
    size * 3 / 2
}

/// Lays out the outline on A4 pages.
pub fn layout_document(outline: &ReportOutline) -> DocumentLayout {
    let mut paginator = Paginator::new();

    paginator.place_block(vec![
        LineSpec::new(LineRole::Title, outline.title.clone()),
        LineSpec::new(LineRole::Meta, format!("Date: {}", outline.date)).spaced(6),
        LineSpec::new(LineRole::Meta, format!("Overall score: {}/10", outline.score)),
    ]);

    // Headings waiting for the first content line below them
    let mut carried: Block = Vec::new();
    for section in &outline.sections {
        let role = match section.level {
            SectionLevel::Section => LineRole::Heading,
            SectionLevel::Subsection => LineRole::Subheading,
        };
        carried.push(LineSpec::new(role, section.heading()));
        for block in section_blocks(&section.entries) {
            let mut block_with_headings = std::mem::take(&mut carried);
            block_with_headings.extend(block);
            paginator.place_block(block_with_headings);
        }
    }
    if !carried.is_empty() {
        paginator.place_block(carried);
    }

    let layout = paginator.finish();
    log::debug!("Document laid out on {} page(s)", layout.page_count());
    layout
}

fn section_blocks(entries: &[OutlineEntry]) -> Vec<Block> {
    let mut blocks = Vec::new();
    for entry in entries {
        match entry {
            OutlineEntry::Field { label, value } => {
                let width = column_width(PAGE_INDENT_PT);
                blocks.push(
                    wrap(&format!("{}: {}", label, value), width, width)
                        .into_iter()
                        .map(|line| LineSpec::new(LineRole::Field, line.text))
                        .collect::<Block>(),
                );
            }
            OutlineEntry::List { label, items } => {
                let mut pending_label = label
                    .as_ref()
                    .map(|label| LineSpec::new(LineRole::ListLabel, format!("{}:", label)));
                for item in items {
                    let mut block = item_block(item);
                    if let Some(label) = pending_label.take() {
                        block.insert(0, label);
                    }
                    blocks.push(block);
                }
            }
        }
    }
    // Gap between a heading and the section content
    if let Some(line) = blocks.first_mut().and_then(|block| block.first_mut()) {
        line.space_before = line.space_before.max(4);
    }
    blocks
}

fn item_block(item: &str) -> Block {
    let first_width =
        column_width(PAGE_INDENT_PT) - text_width(BULLET, FontStyle::Regular, BODY_FONT_SIZE);
    let rest_width = column_width(PAGE_INDENT_PT + CONTINUATION_INDENT_PT);
    wrap(item, first_width, rest_width)
        .into_iter()
        .enumerate()
        .map(|(i, line)| match (i, line.splits_word) {
            (0, _) => LineSpec::new(LineRole::Item, format!("{}{}", BULLET, line.text)),
            (_, true) => LineSpec::new(LineRole::ItemFragment, line.text),
            (_, false) => LineSpec::new(LineRole::ItemContinuation, line.text),
        })
        .collect()
}

/// Usable width in points of a line starting at `x`.
fn column_width(x: i64) -> f64 {
    (PAGE_WIDTH_PT - PAGE_MARGIN_RIGHT_PT - x) as f64
}

#[derive(Debug, Clone, PartialEq)]
struct WrappedLine {
    text: String,
    /// The line starts with the rest of a word cut at the previous line end
    splits_word: bool,
}

/// Greedy word wrap of body text by measured width in points.
///
/// The first line may be narrower than the rest (a bullet takes part of it).
/// Words wider than a whole line are split between characters.
fn wrap(text: &str, first_width: f64, rest_width: f64) -> Vec<WrappedLine> {
    let font = FontStyle::Regular;
    let space = char_width(' ', font, BODY_FONT_SIZE);
    let mut lines: Vec<WrappedLine> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;
    let mut splits_word = false;

    let limit = |lines: &Vec<WrappedLine>| {
        if lines.is_empty() {
            first_width
        } else {
            rest_width
        }
    };

    for word in text.split_whitespace() {
        let word_width = text_width(word, font, BODY_FONT_SIZE);
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + space + word_width
        };
        if needed <= limit(&lines) {
            if !current.is_empty() {
                current.push(' ');
                current_width += space;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(WrappedLine {
                text: std::mem::take(&mut current),
                splits_word,
            });
            current_width = 0.0;
            splits_word = false;
            if word_width <= limit(&lines) {
                current.push_str(word);
                current_width = word_width;
                continue;
            }
        }

        for c in word.chars() {
            let width = char_width(c, font, BODY_FONT_SIZE);
            if !current.is_empty() && current_width + width > limit(&lines) {
                lines.push(WrappedLine {
                    text: std::mem::take(&mut current),
                    splits_word,
                });
                current_width = 0.0;
                splits_word = true;
            }
            current.push(c);
            current_width += width;
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(WrappedLine {
            text: current,
            splits_word,
        });
    }
    lines
}

struct Paginator {
    pages: Vec<Page>,
    current: Page,
    /// Baseline of the next line before its own spacing
    cursor: i64,
}

impl Paginator {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Page::default(),
            cursor: PAGE_MARGIN_TOP_PT,
        }
    }

    fn limit() -> i64 {
        PAGE_HEIGHT_PT - PAGE_MARGIN_BOTTOM_PT
    }

    fn page_is_empty(&self) -> bool {
        self.current.lines.is_empty()
    }

    fn fits(&self, block: &[LineSpec]) -> bool {
        let mut cursor = self.cursor;
        let mut empty = self.page_is_empty();
        for line in block {
            let baseline = cursor + if empty { 0 } else { line.space_before };
            if baseline > Self::limit() {
                return false;
            }
            cursor = baseline + leading(line.size);
            empty = false;
        }
        true
    }

    fn place_block(&mut self, block: Block) {
        if !self.page_is_empty() && !self.fits(&block) {
            log::debug!(
                "Page break before {:?} block on page {}",
                block.first().map(|line| line.role),
                self.pages.len() + 1
            );
            self.break_page();
        }
        for line in block {
            self.place_line(line);
        }
    }

    fn place_line(&mut self, line: LineSpec) {
        let gap = if self.page_is_empty() {
            0
        } else {
            line.space_before
        };
        if !self.page_is_empty() && self.cursor + gap > Self::limit() {
            self.break_page();
        }
        let baseline = self.cursor + if self.page_is_empty() { 0 } else { gap };
        self.current.lines.push(PlacedLine {
            role: line.role,
            font: line.font,
            size: line.size,
            x: line.x,
            baseline,
            text: line.text,
        });
        self.cursor = baseline + leading(line.size);
    }

    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor = PAGE_MARGIN_TOP_PT;
    }

    fn finish(mut self) -> DocumentLayout {
        if !self.page_is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        DocumentLayout { pages: self.pages }
    }
}
