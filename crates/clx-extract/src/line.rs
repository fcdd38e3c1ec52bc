//! Line classification
//!
//! Every trimmed line of a reply is mapped to exactly one [`LineClass`]
//! variant. The heuristics live here, centralized, rather than inlined in
//! the parser loop:
//!
//! - Headings: `#`/`##`/`###` prefix, a `Label:` line, or a fully
//!   bold-wrapped line
//! - Items: `- `/`* ` bullets and `N.`/`N)` numbered lines
//! - A bullet/numbered line whose text is itself fully bold-wrapped is a
//!   sub-heading rendered as a list entry and is promoted accordingly

/// Classification of a single trimmed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A section heading; payload is the normalized heading text
    Heading(String),
    /// A bullet/numbered line carrying a bold-wrapped sub-heading;
    /// payload is the unwrapped heading text
    BoldBulletHeading(String),
    /// A `- `/`* ` item; payload is the trimmed item text
    BulletItem(String),
    /// A `N.`/`N)` item; payload is the trimmed item text
    NumberedItem(String),
    /// Anything else; silently skipped by the parser
    Unrecognized,
}

/// Classify one line of reply text
///
/// Expects the line to already be trimmed. Heading detection runs before
/// item detection, so a line like `**Power**` is a heading even though it
/// starts with `*`.
#[must_use]
pub fn classify_line(line: &str) -> LineClass {
    if is_heading(line) {
        return LineClass::Heading(normalize_heading(line));
    }

    if let Some(text) = bullet_text(line) {
        if let Some(heading) = bold_item_heading(&text) {
            return LineClass::BoldBulletHeading(heading);
        }
        return LineClass::BulletItem(text);
    }

    if let Some(text) = numbered_text(line) {
        if let Some(heading) = bold_item_heading(&text) {
            return LineClass::BoldBulletHeading(heading);
        }
        return LineClass::NumberedItem(text);
    }

    LineClass::Unrecognized
}

/// Strip one leading markdown checkbox token (`[ ]`, `[x]`, `[X]`)
///
/// Surrounding and inner whitespace is tolerated. Returns the input
/// unchanged when no token is present, which makes re-application on
/// already-cleaned text a no-op.
#[must_use]
pub fn strip_leading_checkbox(text: &str) -> &str {
    let rest = text.trim_start();
    let Some(rest) = rest.strip_prefix('[') else {
        return text;
    };
    let mut rest = rest.trim_start();
    if let Some(r) = rest.strip_prefix(['x', 'X']) {
        rest = r.trim_start();
    }
    let Some(rest) = rest.strip_prefix(']') else {
        return text;
    };
    rest.trim_start()
}

/// True when the text is a mislabeled sub-heading (ends with a colon)
#[must_use]
pub fn is_label_line(text: &str) -> bool {
    text.trim_end().ends_with(':')
}

/// Heading test: `#`-prefixed, `Label:`, or `**bold-wrapped**`
fn is_heading(line: &str) -> bool {
    hash_heading_content(line).is_some() || is_label_heading(line) || is_bold_wrapped(line)
}

/// Normalize a heading line: strip `#` markers, trailing colon and bold
/// wrapping, then trim
fn normalize_heading(line: &str) -> String {
    let mut heading = hash_heading_content(line).unwrap_or(line);
    heading = heading.strip_suffix(':').unwrap_or(heading);
    heading = unwrap_bold(heading).unwrap_or(heading);
    heading.trim().to_string()
}

/// Content of a `#`/`##`/`###` heading, if the line is one
fn hash_heading_content(line: &str) -> Option<&str> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if !(1..=3).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    let content = rest.trim_start();
    // Marker must be followed by whitespace and actual content
    if content.len() == rest.len() || content.is_empty() {
        return None;
    }
    Some(content)
}

/// `Label:` form: starts with a letter, ends with a colon
fn is_label_heading(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && line.ends_with(':')
        && line.chars().count() >= 3
}

/// Entirely wrapped in `**...**` with non-empty inner text
fn is_bold_wrapped(line: &str) -> bool {
    unwrap_bold(line).is_some()
}

/// Inner text of a `**...**` wrap, if present
fn unwrap_bold(line: &str) -> Option<&str> {
    if line.len() >= 5 && line.starts_with("**") && line.ends_with("**") {
        Some(&line[2..line.len() - 2])
    } else {
        None
    }
}

/// Item text of a `- `/`* ` bullet line, trimmed; `None` when the line is
/// not a bullet or carries no text
fn bullet_text(line: &str) -> Option<String> {
    let rest = line.strip_prefix(['-', '*'])?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Item text of a `N.`/`N)` numbered line, trimmed
fn numbered_text(line: &str) -> Option<String> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix(['.', ')'])?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Bold-wrapped item text (optionally colon-terminated) promoted to a
/// heading, e.g. `**Power**` or `**Power**:` inside a bullet; a colon
/// *inside* the wrap stays part of the heading text
fn bold_item_heading(text: &str) -> Option<String> {
    let stripped = text.strip_suffix(':').unwrap_or(text);
    unwrap_bold(stripped).map(|inner| inner.trim().to_string())
}
