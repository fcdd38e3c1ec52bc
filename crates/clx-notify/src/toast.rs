//! Toast types

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique toast identifier (ULID, opaque, generated per `show` call)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToastId(pub Ulid);

impl ToastId {
    /// Generate a new toast ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual category of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Operation completed
    Success,
    /// Something went wrong
    Error,
    /// Neutral information
    Info,
    /// Needs attention but not an error
    Warning,
}

/// A transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Unique id for dismissal and expiry
    pub id: ToastId,
    /// Visual category
    pub kind: ToastKind,
    /// Message text
    pub text: String,
    /// Lifetime before auto-expiry, in milliseconds
    pub duration_ms: u64,
}

/// Lifecycle event emitted by the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    /// A toast was enqueued
    Shown(Toast),
    /// A toast was removed by explicit user dismissal
    Dismissed(ToastId),
    /// A toast was removed by its own timer
    Expired(ToastId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&ToastKind::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
