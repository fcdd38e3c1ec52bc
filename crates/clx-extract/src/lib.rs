//! CLX Extract - Freeform-to-structured checklist extraction
//!
//! Assistant replies arrive as markdown-ish, inconsistently formatted text.
//! This crate decides whether a reply should be treated as an editable
//! checklist and, if so, parses it into ordered sections of items:
//!
//! - **Line classification**: each line is mapped to a tagged
//!   [`LineClass`] variant by small, independently testable heuristics
//! - **Classification**: [`should_treat_as_checklist`] is a pure, total
//!   predicate over a (prompt, reply) pair
//! - **Parsing**: [`parse`] is deterministic and total; progressively
//!   looser fallback tiers extract *something* usable rather than failing
//!
//! Both entry points are stateless and referentially transparent; there is
//! no error type because ambiguous input degrades to `false` or to an
//! empty single-section model, never to a failure.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod classifier;
pub mod line;
pub mod parser;

// Re-exports for convenience
pub use classifier::{looks_like_list, mentions_checklist, should_treat_as_checklist};
pub use line::{classify_line, strip_leading_checkbox, LineClass};
pub use parser::parse;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
