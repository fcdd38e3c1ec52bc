//! Checklist parsing
//!
//! Converts raw reply text into a [`ChecklistModel`]. Parsing is
//! deterministic and total: a structured line-by-line pass preserves
//! section structure when the source cooperates, and two progressively
//! looser fallback tiers extract whatever list shape can be found when it
//! does not. Worst case is one section with zero items, never an error.

use crate::classifier::{is_bullet_form, is_numbered_form};
use crate::line::{classify_line, is_label_line, strip_leading_checkbox, LineClass};
use clx_model::{ChecklistItem, ChecklistModel, ChecklistSection};

/// Heading used when items appear before any section, and by both
/// fallback tiers
const DEFAULT_HEADING: &str = "Checklist";

/// Parse a reply into a checklist model
///
/// Never fails. Structure is taken from the structured pass when it finds
/// any section; otherwise tier 1 re-scans raw lines for list forms and
/// tier 2 splits on semicolons or `•` glyphs. If every tier comes up
/// empty the model holds a single untitled-default section with no items.
#[must_use]
pub fn parse(reply: &str) -> ChecklistModel {
    let sections = structured_pass(reply);
    if !sections.is_empty() {
        return ChecklistModel::from_sections(sections);
    }

    tracing::debug!("structured pass found no sections, falling back");
    let items = match fallback_list_lines(reply) {
        Some(items) => items,
        None => {
            let items = fallback_segments(reply);
            if items.is_empty() {
                tracing::debug!("all fallback tiers empty, returning bare section");
            }
            items
        }
    };

    let mut section = ChecklistSection::new(DEFAULT_HEADING);
    section.items = items;
    ChecklistModel::from_sections(vec![section])
}

/// Fold state for the structured pass: the sections built so far and the
/// index of the currently open one
#[derive(Debug, Default)]
struct Accumulator {
    sections: Vec<ChecklistSection>,
    current: Option<usize>,
}

impl Accumulator {
    /// Close the current section and open a new one
    fn open_section(&mut self, heading: String) {
        self.sections.push(ChecklistSection::new(heading));
        self.current = Some(self.sections.len() - 1);
    }

    /// Append an item to the open section, synthesizing a default section
    /// when none is open yet
    fn push_item(&mut self, raw_text: &str) {
        let text = strip_leading_checkbox(raw_text);
        if is_label_line(text) {
            // Mislabeled sub-heading, not a real item
            return;
        }
        let index = match self.current {
            Some(index) => index,
            None => {
                self.open_section(DEFAULT_HEADING.to_string());
                self.sections.len() - 1
            }
        };
        self.sections[index].push_item(ChecklistItem::new(text));
    }
}

/// Strict first pass: classify trimmed non-empty lines in order
fn structured_pass(reply: &str) -> Vec<ChecklistSection> {
    let mut acc = Accumulator::default();
    for line in reply.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match classify_line(line) {
            LineClass::Heading(heading) | LineClass::BoldBulletHeading(heading) => {
                acc.open_section(heading);
            }
            LineClass::BulletItem(text) | LineClass::NumberedItem(text) => {
                acc.push_item(&text);
            }
            LineClass::Unrecognized => {}
        }
    }
    acc.sections
}

/// Tier 1: re-scan raw (untrimmed) lines for list forms
///
/// Returns `None` when no list-like line exists at all; `Some` otherwise,
/// even if every candidate was discarded as a label line. Bulleted lines
/// are collected before numbered ones.
fn fallback_list_lines(reply: &str) -> Option<Vec<ChecklistItem>> {
    let bullets = reply
        .lines()
        .filter(|l| is_bullet_form(l.trim_start()));
    let numbers = reply
        .lines()
        .filter(|l| is_numbered_form(l.trim_start()));

    let mut found_any = false;
    let mut items = Vec::new();
    for line in bullets.chain(numbers) {
        found_any = true;
        let text = strip_leading_checkbox(strip_list_prefix(line).trim());
        if !is_label_line(text) {
            items.push(ChecklistItem::new(text));
        }
    }

    if found_any {
        tracing::debug!(items = items.len(), "tier 1 fallback extracted list lines");
        Some(items)
    } else {
        None
    }
}

/// Tier 2: split on semicolons or the bullet glyph
///
/// Only applies when the split yields more than one non-empty segment.
fn fallback_segments(reply: &str) -> Vec<ChecklistItem> {
    let segments: Vec<&str> = reply
        .split([';', '\u{2022}'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if segments.len() <= 1 {
        return Vec::new();
    }

    let mut items = Vec::new();
    for segment in segments {
        let stripped = segment
            .trim_start_matches(|c: char| {
                c == '-' || c == '*' || c == '.' || c == ')' || c.is_ascii_digit()
            })
            .trim_start();
        let text = strip_leading_checkbox(stripped);
        if !is_label_line(text) {
            items.push(ChecklistItem::new(text));
        }
    }
    tracing::debug!(items = items.len(), "tier 2 fallback split segments");
    items
}

/// Remove a leading bullet or number marker (`- `, `* `, `N. `, `N) `)
fn strip_list_prefix(line: &str) -> &str {
    let trimmed = line.trim_start();

    if let Some(rest) = trimmed.strip_prefix(['-', '*']) {
        if rest.starts_with(char::is_whitespace) {
            return rest.trim_start();
        }
    }

    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(rest) = trimmed[digits..].strip_prefix(['.', ')']) {
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }

    trimmed
}
