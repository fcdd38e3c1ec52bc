//! The checklist model
//!
//! An ordered sequence of sections. A model is created fresh on every
//! successful classify+parse and replaced wholesale; it is cleared on
//! session reset or conversation clear.

use crate::section::ChecklistSection;
use serde::{Deserialize, Serialize};

/// Ordered sequence of checklist sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistModel {
    /// Sections in display order
    pub sections: Vec<ChecklistSection>,
}

impl ChecklistModel {
    /// Create an empty model
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model from parsed sections
    #[inline]
    #[must_use]
    pub fn from_sections(sections: Vec<ChecklistSection>) -> Self {
        Self { sections }
    }

    /// True when the model holds no sections at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of sections
    #[inline]
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of items across all sections
    #[inline]
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
