//! Checklist items
//!
//! An item is a single line of user-editable text plus a selection flag.
//! The one invariant: an item with blank text is never selectable.

use serde::{Deserialize, Serialize};

/// A single selectable line of checklist text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// User-editable free text
    pub text: String,
    /// Whether the item is currently selected for submission
    pub selected: bool,
}

impl ChecklistItem {
    /// Create an unselected item
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selected: false,
        }
    }

    /// True when the text is empty or whitespace-only
    ///
    /// Blank items render disabled and cannot be selected.
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the item text, deselecting if the new text is blank
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.is_blank() {
            self.selected = false;
        }
    }

    /// Set the selection flag
    ///
    /// Selecting a blank item is refused (no-op); deselecting always works.
    pub fn set_selected(&mut self, selected: bool) {
        if selected && self.is_blank() {
            return;
        }
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_starts_unselected() {
        let item = ChecklistItem::new("Check power supply");
        assert_eq!(item.text, "Check power supply");
        assert!(!item.selected);
    }

    #[test]
    fn blank_detection() {
        assert!(ChecklistItem::new("").is_blank());
        assert!(ChecklistItem::new("   ").is_blank());
        assert!(ChecklistItem::new("\t\n").is_blank());
        assert!(!ChecklistItem::new("x").is_blank());
    }

    #[test]
    fn blanking_text_forces_deselection() {
        let mut item = ChecklistItem::new("Check cables");
        item.set_selected(true);
        assert!(item.selected);

        item.set_text("   ");
        assert!(!item.selected);
    }

    #[test]
    fn blank_item_cannot_be_selected() {
        let mut item = ChecklistItem::new("  ");
        item.set_selected(true);
        assert!(!item.selected);
    }

    #[test]
    fn deselecting_blank_item_is_allowed() {
        let mut item = ChecklistItem::new("x");
        item.set_selected(true);
        item.set_text("");
        item.set_selected(false);
        assert!(!item.selected);
    }
}
