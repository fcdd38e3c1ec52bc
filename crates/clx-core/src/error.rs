//! Error types for the checklist flow
//!
//! Classification and parsing are total and never fail; edit-state index
//! misses are silent no-ops. The one user-visible failure is submitting
//! with nothing selected.

/// Errors raised by the submission flow
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Submit was requested while no item is selected
    #[error("no checklist items selected")]
    NothingSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_error_display() {
        assert_eq!(
            SubmitError::NothingSelected.to_string(),
            "no checklist items selected"
        );
    }
}
