//! Checklist classification
//!
//! Decides whether an assistant reply should be rendered as an editable
//! checklist rather than plain text. The predicate is pure and total:
//! ambiguous or empty input yields `false`, biasing toward *not* showing
//! an editable checklist over mis-rendering one.

/// Decide whether a reply should be treated as an editable checklist
///
/// Fires when the reply looks like a list AND any of the following holds:
/// the request came from the checklist-generating route, the prompt
/// mentions the word "checklist", or the reply does.
#[must_use]
pub fn should_treat_as_checklist(
    prompt: &str,
    reply: &str,
    came_from_checklist_route: bool,
) -> bool {
    let listy = looks_like_list(reply);
    let verdict = listy
        && (came_from_checklist_route
            || mentions_checklist(prompt)
            || mentions_checklist(reply));
    tracing::debug!(
        looks_like_list = listy,
        came_from_checklist_route,
        verdict,
        "classified reply"
    );
    verdict
}

/// Case-insensitive substring match for the literal word "checklist"
#[must_use]
pub fn mentions_checklist(text: &str) -> bool {
    text.to_lowercase().contains("checklist")
}

/// True when any line of the text is a bulleted or numbered list form
///
/// Searched line-by-line with leading whitespace tolerated, never anchored
/// to the whole string.
#[must_use]
pub fn looks_like_list(text: &str) -> bool {
    text.lines().map(str::trim_start).any(|line| {
        is_bullet_form(line) || is_numbered_form(line)
    })
}

/// `-` or `*` followed by whitespace and at least one more character
pub(crate) fn is_bullet_form(line: &str) -> bool {
    line.strip_prefix(['-', '*'])
        .is_some_and(|rest| rest.starts_with(char::is_whitespace) && rest.chars().count() >= 2)
}

/// `N.` or `N)` followed by whitespace and at least one more character
pub(crate) fn is_numbered_form(line: &str) -> bool {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return false;
    }
    line[digits..]
        .strip_prefix(['.', ')'])
        .is_some_and(|rest| rest.starts_with(char::is_whitespace) && rest.chars().count() >= 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_detection_bullets() {
        assert!(looks_like_list("- one item"));
        assert!(looks_like_list("* one item"));
        assert!(looks_like_list("intro text\n  - indented item\noutro"));
    }

    #[test]
    fn list_detection_numbered() {
        assert!(looks_like_list("1. first"));
        assert!(looks_like_list("2) second"));
        assert!(looks_like_list("Here you go:\n10. tenth"));
    }

    #[test]
    fn non_lists_are_rejected() {
        assert!(!looks_like_list(""));
        assert!(!looks_like_list("Just a paragraph of prose."));
        assert!(!looks_like_list("a-b hyphenated, 3.14 decimal"));
        assert!(!looks_like_list("-no space after marker"));
    }

    #[test]
    fn checklist_mention_is_case_insensitive() {
        assert!(mentions_checklist("Give me a CHECKLIST please"));
        assert!(mentions_checklist("here is your Checklist:"));
        assert!(!mentions_checklist("give me a list of checks"));
    }

    #[test]
    fn route_flag_requires_list_shape() {
        // From the checklist route but the reply has no list-like line
        assert!(!should_treat_as_checklist("anything", "plain prose", true));
        assert!(should_treat_as_checklist("anything", "- item", true));
    }

    #[test]
    fn mention_requires_list_shape() {
        // Mentioning "checklist" alone is not enough
        assert!(!should_treat_as_checklist(
            "make me a checklist",
            "I cannot do that.",
            false
        ));
        assert!(should_treat_as_checklist(
            "make me a checklist",
            "- step one\n- step two",
            false
        ));
        // Mention may come from the reply instead of the prompt
        assert!(should_treat_as_checklist(
            "help with my monitor",
            "Here is a checklist:\n- step one",
            false
        ));
    }

    #[test]
    fn well_formed_list_without_trigger_is_not_a_checklist() {
        // Neither route nor mention: stays plain text even though the reply
        // is full of bullets
        assert!(!should_treat_as_checklist(
            "how do I test a monitor",
            "## Steps\n- check cables\n- check power",
            false
        ));
    }

    #[test]
    fn empty_inputs_default_to_false() {
        assert!(!should_treat_as_checklist("", "", false));
        assert!(!should_treat_as_checklist("", "", true));
    }
}
