//! CLX Notify - Ephemeral notification queue
//!
//! Holds transient user-facing messages ("toasts"), each with an
//! independent expiry timer:
//!
//! - `show` enqueues a toast and schedules its removal after its duration
//! - `dismiss` removes a toast early; the pending timer becomes a no-op
//! - `toasts` snapshots the live queue for the notification surface
//! - `subscribe` streams lifecycle events for push-style consumers
//!
//! There is no cap on queue depth and no deduplication: identical repeated
//! calls produce distinct, independently-timed entries. Queue mutation is a
//! single lock-guarded step so back-to-back timer firings cannot lose
//! updates.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod queue;
pub mod toast;

// Re-exports for convenience
pub use queue::{NotificationQueue, DEFAULT_TOAST_DURATION};
pub use toast::{Toast, ToastEvent, ToastId, ToastKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
