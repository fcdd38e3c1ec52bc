//! The notification queue
//!
//! Each toast gets its own spawned expiry task. Dismissal does not cancel
//! the task; a timer firing for an id that is already gone finds nothing to
//! remove and stays silent. All queue mutation happens as one push/retain
//! under a single mutex.

use crate::toast::{Toast, ToastEvent, ToastId, ToastKind};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

/// Default toast lifetime when the caller does not pick one
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

/// Capacity of the lifecycle event channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Shared, cloneable handle to the toast queue
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    toasts: Mutex<Vec<Toast>>,
    events: broadcast::Sender<ToastEvent>,
}

impl NotificationQueue {
    /// Create an empty queue
    #[must_use]
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                toasts: Mutex::new(Vec::new()),
                events,
            }),
        }
    }

    /// Enqueue a toast and schedule its expiry
    ///
    /// The expiry timer is independent per toast; repeated identical calls
    /// produce distinct entries. Must be called within a tokio runtime.
    pub fn show(&self, text: impl Into<String>, kind: ToastKind, duration: Duration) -> ToastId {
        let toast = Toast {
            id: ToastId::new(),
            kind,
            text: text.into(),
            duration_ms: duration.as_millis() as u64,
        };
        let id = toast.id;

        self.inner.toasts.lock().push(toast.clone());
        tracing::debug!(%id, ?kind, "toast shown");
        let _ = self.inner.events.send(ToastEvent::Shown(toast));

        let queue = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if queue.remove(id) {
                tracing::debug!(%id, "toast expired");
                let _ = queue.inner.events.send(ToastEvent::Expired(id));
            }
            // Already dismissed: the fired timer is a no-op
        });

        id
    }

    /// Enqueue a toast with the default duration
    pub fn show_default(&self, text: impl Into<String>, kind: ToastKind) -> ToastId {
        self.show(text, kind, DEFAULT_TOAST_DURATION)
    }

    /// Remove a toast immediately, regardless of its timer
    pub fn dismiss(&self, id: ToastId) {
        if self.remove(id) {
            tracing::debug!(%id, "toast dismissed");
            let _ = self.inner.events.send(ToastEvent::Dismissed(id));
        }
    }

    /// Ordered snapshot of the live queue
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.toasts.lock().clone()
    }

    /// True when a toast with this id is still queued
    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.inner.toasts.lock().iter().any(|t| t.id == id)
    }

    /// Number of live toasts
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.toasts.lock().len()
    }

    /// True when no toasts are queued
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.toasts.lock().is_empty()
    }

    /// Subscribe to lifecycle events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.inner.events.subscribe()
    }

    /// Single atomic removal step shared by dismissal and expiry
    fn remove(&self, id: ToastId) -> bool {
        let mut toasts = self.inner.toasts.lock();
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        toasts.len() != before
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}
