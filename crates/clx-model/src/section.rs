//! Checklist sections
//!
//! A section is a heading plus an ordered sequence of items. The `editing`
//! flag is transient UI state for heading edits; it has no effect on
//! parsing or submission.

use crate::item::ChecklistItem;
use serde::{Deserialize, Serialize};

/// A named grouping of checklist items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    /// Section heading shown above the items
    pub heading: String,
    /// Ordered items in this section
    pub items: Vec<ChecklistItem>,
    /// Whether the heading is currently being edited
    #[serde(default)]
    pub editing: bool,
}

impl ChecklistSection {
    /// Create an empty committed section
    #[inline]
    #[must_use]
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            items: Vec::new(),
            editing: false,
        }
    }

    /// Create a section already in heading-edit mode
    #[inline]
    #[must_use]
    pub fn new_editing(heading: impl Into<String>) -> Self {
        Self {
            editing: true,
            ..Self::new(heading)
        }
    }

    /// Append an item
    pub fn push_item(&mut self, item: ChecklistItem) {
        self.items.push(item);
    }

    /// True when any item in the section is selected
    #[inline]
    #[must_use]
    pub fn has_selected(&self) -> bool {
        self.items.iter().any(|i| i.selected)
    }
}
