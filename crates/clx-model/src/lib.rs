//! CLX Model - Checklist data model
//!
//! Defines the structured form a freeform assistant reply is parsed into:
//! - `ChecklistItem`: a single editable, selectable line of text
//! - `ChecklistSection`: a named, ordered grouping of items
//! - `ChecklistModel`: the ordered sequence of sections
//! - `SelectedItem` / `SectionGroup`: read-only submission projections
//!
//! Item identity is positional (index within its section); there are no
//! stable ids. The model is always replaced wholesale on a new reply,
//! never merged incrementally.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod item;
pub mod model;
pub mod section;
pub mod selection;

// Re-exports for convenience
pub use item::ChecklistItem;
pub use model::ChecklistModel;
pub use section::ChecklistSection;
pub use selection::{SectionGroup, SelectedItem};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
