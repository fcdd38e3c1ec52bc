//! CLX Core - Editable checklist state and session flow
//!
//! Owns everything that happens after a reply has been classified and
//! parsed:
//! - [`ChecklistEditState`]: the mutable, user-editable projection of the
//!   parsed sections, plus the selection-to-submission transform
//! - [`Transcript`]: the in-memory conversation log
//! - [`ChecklistFlow`]: wires classifier → parser → edit state and
//!   surfaces validation feedback through the notification queue
//!
//! # Example
//!
//! ```rust,ignore
//! use clx_core::{ChecklistFlow, FlowConfig};
//! use clx_notify::NotificationQueue;
//!
//! let mut flow = ChecklistFlow::new(FlowConfig::new(), NotificationQueue::new());
//! if flow.on_reply("qc checklist please", reply, false) {
//!     // user edits and selects items ...
//!     let grouped = flow.submit()?;
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod edit_state;
pub mod error;
pub mod flow;
pub mod transcript;

// Re-exports for convenience
pub use config::FlowConfig;
pub use edit_state::{is_item_disabled, ChecklistEditState};
pub use error::SubmitError;
pub use flow::ChecklistFlow;
pub use transcript::{ChatMessage, ChatRole, MessageId, Transcript};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the checklist flow
    pub use crate::{ChecklistEditState, ChecklistFlow, FlowConfig, SubmitError, Transcript};
    pub use clx_extract::{parse, should_treat_as_checklist};
    pub use clx_model::{ChecklistItem, ChecklistModel, ChecklistSection, SectionGroup, SelectedItem};
    pub use clx_notify::{NotificationQueue, ToastKind};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
