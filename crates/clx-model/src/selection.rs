//! Submission projections
//!
//! `SelectedItem` is a flattened, read-only view of the selected items,
//! produced on demand at submission time. `SectionGroup` regroups that
//! flat list by section name for the confirmation surface. Neither is ever
//! merged back into the model.

use serde::{Deserialize, Serialize};

/// A selected item flattened out of its section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedItem {
    /// Heading of the section the item came from
    pub section: String,
    /// Item text at submission time
    pub text: String,
    /// Always `true` when produced by the submission transform
    pub selected: bool,
}

impl SelectedItem {
    /// Create a selected-item projection
    #[inline]
    #[must_use]
    pub fn new(section: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            text: text.into(),
            selected: true,
        }
    }
}

/// Selected items regrouped under their section name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionGroup {
    /// Section display name
    pub section_name: String,
    /// Selected items belonging to that section, in selection order
    pub items: Vec<SelectedItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_item_is_marked_selected() {
        let item = SelectedItem::new("Display", "Check screen");
        assert!(item.selected);
        assert_eq!(item.section, "Display");
    }
}
