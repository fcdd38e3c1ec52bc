//! Flow configuration

use clx_notify::DEFAULT_TOAST_DURATION;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for the checklist flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Lifetime of toasts raised by the flow
    pub toast_duration: Duration,
    /// Error message shown when submitting with nothing selected
    pub nothing_selected_message: String,
    /// Confirmation message shown after a submission is accepted
    pub saved_message: String,
}

impl FlowConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a toast duration
    #[inline]
    #[must_use]
    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    /// With a nothing-selected error message
    #[inline]
    #[must_use]
    pub fn with_nothing_selected_message(mut self, message: impl Into<String>) -> Self {
        self.nothing_selected_message = message.into();
        self
    }

    /// With a saved-confirmation message
    #[inline]
    #[must_use]
    pub fn with_saved_message(mut self, message: impl Into<String>) -> Self {
        self.saved_message = message.into();
        self
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            toast_duration: DEFAULT_TOAST_DURATION,
            nothing_selected_message: "Please select some checklist item to proceed!".to_string(),
            saved_message:
                "Finalized QC Checklist has been saved successfully for this equipment!"
                    .to_string(),
        }
    }
}
