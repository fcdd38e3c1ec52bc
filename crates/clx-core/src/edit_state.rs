//! Editable checklist state
//!
//! The live, user-editable projection of a parsed checklist. Index-based
//! operations absorb invalid indices as silent no-ops: UI controls are
//! expected to only ever reference valid positions, and a stale index is
//! not worth an error surface.
//!
//! Sections move through `created → editing → committed`; there is no
//! deleted state. Sections and items only ever disappear through wholesale
//! model replacement.

use clx_extract::strip_leading_checkbox;
use clx_model::{ChecklistItem, ChecklistModel, ChecklistSection, SectionGroup, SelectedItem};
use indexmap::IndexMap;

/// Heading given to a section created through [`ChecklistEditState::add_section`]
pub const NEW_SECTION_HEADING: &str = "New Section";

/// Heading substituted when an edit commits a blank heading
pub const UNTITLED_SECTION_HEADING: &str = "Untitled Section";

/// True when the item cannot be selected (blank text)
#[inline]
#[must_use]
pub fn is_item_disabled(item: &ChecklistItem) -> bool {
    item.is_blank()
}

/// Mutable, user-editable checklist state
#[derive(Debug, Clone, Default)]
pub struct ChecklistEditState {
    model: ChecklistModel,
}

impl ChecklistEditState {
    /// Create an empty edit state
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current model
    #[inline]
    #[must_use]
    pub fn model(&self) -> &ChecklistModel {
        &self.model
    }

    /// Replace the model wholesale with a freshly parsed one
    pub fn replace_model(&mut self, model: ChecklistModel) {
        self.model = model;
    }

    /// Drop the model entirely (session reset / conversation clear)
    pub fn clear(&mut self) {
        self.model = ChecklistModel::new();
    }

    /// Append an empty, unselected item to a section
    ///
    /// No-op when the section index is out of range.
    pub fn add_item(&mut self, section_index: usize) {
        if let Some(section) = self.model.sections.get_mut(section_index) {
            section.push_item(ChecklistItem::new(""));
        }
    }

    /// Append a new section in heading-edit mode
    ///
    /// The caller is expected to prompt for a heading immediately and then
    /// call [`finish_section_edit`](Self::finish_section_edit).
    pub fn add_section(&mut self) {
        self.model
            .sections
            .push(ChecklistSection::new_editing(NEW_SECTION_HEADING));
    }

    /// Replace a section heading as the user types
    ///
    /// Stored verbatim; trimming and the blank-heading placeholder are
    /// applied when the edit commits. No-op on an invalid index.
    pub fn update_section_heading(&mut self, section_index: usize, heading: impl Into<String>) {
        if let Some(section) = self.model.sections.get_mut(section_index) {
            section.heading = heading.into();
        }
    }

    /// Commit a heading edit
    ///
    /// Trims the heading, substitutes the untitled placeholder when it is
    /// blank, and leaves edit mode. No-op on an invalid index.
    pub fn finish_section_edit(&mut self, section_index: usize) {
        let Some(section) = self.model.sections.get_mut(section_index) else {
            return;
        };
        let trimmed = section.heading.trim();
        section.heading = if trimmed.is_empty() {
            UNTITLED_SECTION_HEADING.to_string()
        } else {
            trimmed.to_string()
        };
        section.editing = false;
    }

    /// Apply a user edit to an item's text
    ///
    /// Strips any leading checkbox token the user typed (the same rule the
    /// parser applies, so re-application on clean text is a no-op) and
    /// forces deselection when the resulting text is blank. No-op on
    /// invalid indices.
    pub fn update_item_text(
        &mut self,
        section_index: usize,
        item_index: usize,
        text: impl Into<String>,
    ) {
        let Some(item) = self.item_mut(section_index, item_index) else {
            return;
        };
        let text = text.into();
        let cleaned = strip_leading_checkbox(&text).to_string();
        item.set_text(cleaned);
    }

    /// Toggle an item's selection
    ///
    /// Selecting a blank item is refused; invalid indices are no-ops.
    pub fn set_item_selected(&mut self, section_index: usize, item_index: usize, selected: bool) {
        if let Some(item) = self.item_mut(section_index, item_index) {
            item.set_selected(selected);
        }
    }

    /// True when any item across any section is selected
    #[must_use]
    pub fn has_any_selected(&self) -> bool {
        self.model.sections.iter().any(ChecklistSection::has_selected)
    }

    /// Flatten the selected items for submission
    ///
    /// Pure and read-only: filters to `selected = true` and tags each item
    /// with its section heading. The model is not mutated.
    #[must_use]
    pub fn build_submission(&self) -> Vec<SelectedItem> {
        self.model
            .sections
            .iter()
            .flat_map(|section| {
                section
                    .items
                    .iter()
                    .filter(|item| item.selected)
                    .map(|item| SelectedItem::new(&section.heading, &item.text))
            })
            .collect()
    }

    /// Group a flattened selection back by section name
    ///
    /// Preserves first-seen section order, not alphabetical order.
    #[must_use]
    pub fn group_submission_by_section(selection: &[SelectedItem]) -> Vec<SectionGroup> {
        let mut grouped: IndexMap<String, Vec<SelectedItem>> = IndexMap::new();
        for item in selection {
            grouped
                .entry(item.section.clone())
                .or_default()
                .push(item.clone());
        }
        grouped
            .into_iter()
            .map(|(section_name, items)| SectionGroup {
                section_name,
                items,
            })
            .collect()
    }

    fn item_mut(&mut self, section_index: usize, item_index: usize) -> Option<&mut ChecklistItem> {
        self.model
            .sections
            .get_mut(section_index)?
            .items
            .get_mut(item_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clx_extract::parse;
    use pretty_assertions::assert_eq;

    fn seeded_state() -> ChecklistEditState {
        let mut state = ChecklistEditState::new();
        state.replace_model(parse(
            "## Display\n- Check screen\n- Verify brightness\n## Ports\n- HDMI input functional",
        ));
        state
    }

    #[test]
    fn fresh_model_has_nothing_selected() {
        let state = seeded_state();
        assert!(!state.has_any_selected());
        assert!(state.build_submission().is_empty());
    }

    #[test]
    fn add_item_appends_empty_unselected() {
        let mut state = seeded_state();
        state.add_item(0);

        let items = &state.model().sections[0].items;
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].text, "");
        assert!(!items[2].selected);
    }

    #[test]
    fn add_item_out_of_range_is_noop() {
        let mut state = seeded_state();
        let before = state.model().clone();
        state.add_item(99);
        assert_eq!(state.model(), &before);
    }

    #[test]
    fn add_section_enters_edit_mode() {
        let mut state = seeded_state();
        state.add_section();

        let section = state.model().sections.last().unwrap();
        assert_eq!(section.heading, NEW_SECTION_HEADING);
        assert!(section.editing);
        assert!(section.items.is_empty());
    }

    #[test]
    fn finishing_edit_with_blank_heading_uses_placeholder() {
        let mut state = seeded_state();
        state.add_section();
        let index = state.model().section_count() - 1;

        state.update_section_heading(index, "   ");
        state.finish_section_edit(index);

        let section = &state.model().sections[index];
        assert_eq!(section.heading, UNTITLED_SECTION_HEADING);
        assert!(!section.editing);
    }

    #[test]
    fn finishing_edit_trims_heading() {
        let mut state = seeded_state();
        state.add_section();
        let index = state.model().section_count() - 1;

        state.update_section_heading(index, "  Cables  ");
        state.finish_section_edit(index);
        assert_eq!(state.model().sections[index].heading, "Cables");
    }

    #[test]
    fn finishing_edit_keeps_nonblank_heading() {
        let mut state = seeded_state();
        state.add_section();
        let index = state.model().section_count() - 1;

        state.finish_section_edit(index);
        assert_eq!(state.model().sections[index].heading, NEW_SECTION_HEADING);
        assert!(!state.model().sections[index].editing);
    }

    #[test]
    fn finish_edit_out_of_range_is_noop() {
        let mut state = seeded_state();
        state.finish_section_edit(42);
    }

    #[test]
    fn update_heading_out_of_range_is_noop() {
        let mut state = seeded_state();
        let before = state.model().clone();
        state.update_section_heading(42, "ghost");
        assert_eq!(state.model(), &before);
    }

    #[test]
    fn update_item_text_strips_checkbox_token() {
        let mut state = seeded_state();
        state.update_item_text(0, 0, "[x] Verify cables");
        assert_eq!(state.model().sections[0].items[0].text, "Verify cables");
    }

    #[test]
    fn update_item_text_is_idempotent_on_clean_text() {
        let mut state = seeded_state();
        state.update_item_text(0, 0, "Verify cables");
        state.update_item_text(0, 0, "Verify cables");
        assert_eq!(state.model().sections[0].items[0].text, "Verify cables");
    }

    #[test]
    fn blanking_item_text_deselects_it() {
        let mut state = seeded_state();
        state.set_item_selected(0, 0, true);
        assert!(state.has_any_selected());

        state.update_item_text(0, 0, "   ");
        assert!(!state.model().sections[0].items[0].selected);
    }

    #[test]
    fn blank_items_are_disabled_and_unselectable() {
        let mut state = seeded_state();
        state.add_item(0);
        let index = state.model().sections[0].items.len() - 1;

        assert!(is_item_disabled(&state.model().sections[0].items[index]));
        state.set_item_selected(0, index, true);
        assert!(!state.model().sections[0].items[index].selected);
    }

    #[test]
    fn submission_flattens_selected_items_with_section_names() {
        let mut state = seeded_state();
        state.set_item_selected(0, 1, true);
        state.set_item_selected(1, 0, true);

        let submission = state.build_submission();
        assert_eq!(submission.len(), 2);
        assert_eq!(submission[0].section, "Display");
        assert_eq!(submission[0].text, "Verify brightness");
        assert_eq!(submission[1].section, "Ports");
        assert!(submission.iter().all(|s| s.selected));
    }

    #[test]
    fn build_submission_does_not_mutate() {
        let mut state = seeded_state();
        state.set_item_selected(0, 0, true);
        let before = state.model().clone();
        let _ = state.build_submission();
        assert_eq!(state.model(), &before);
    }

    #[test]
    fn grouping_preserves_first_seen_section_order() {
        let selection = vec![
            SelectedItem::new("Zeta", "z1"),
            SelectedItem::new("Alpha", "a1"),
            SelectedItem::new("Zeta", "z2"),
        ];
        let grouped = ChecklistEditState::group_submission_by_section(&selection);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].section_name, "Zeta");
        assert_eq!(grouped[0].items.len(), 2);
        assert_eq!(grouped[1].section_name, "Alpha");
    }

    #[test]
    fn replace_model_is_wholesale() {
        let mut state = seeded_state();
        state.set_item_selected(0, 0, true);

        state.replace_model(parse("- fresh item"));
        assert!(!state.has_any_selected());
        assert_eq!(state.model().section_count(), 1);
    }

    #[test]
    fn clear_drops_everything() {
        let mut state = seeded_state();
        state.clear();
        assert!(state.model().is_empty());
    }
}
