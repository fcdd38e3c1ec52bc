//! The checklist session flow
//!
//! Control flow for one conversation: a reply arrives, the classifier
//! evaluates it, a positive verdict replaces the live editable model with
//! freshly parsed sections, the user edits and selects, and submission
//! produces the grouped confirmation view. Validation feedback goes
//! through the notification queue.

use crate::config::FlowConfig;
use crate::edit_state::ChecklistEditState;
use crate::error::SubmitError;
use crate::transcript::Transcript;
use clx_extract::{parse, should_treat_as_checklist};
use clx_model::SectionGroup;
use clx_notify::{NotificationQueue, ToastKind};

/// Orchestrates transcript, extraction, edit state and notifications for
/// one conversation
#[derive(Debug)]
pub struct ChecklistFlow {
    config: FlowConfig,
    transcript: Transcript,
    edit_state: ChecklistEditState,
    notifications: NotificationQueue,
}

impl ChecklistFlow {
    /// Create a flow sharing the given notification queue
    #[must_use]
    pub fn new(config: FlowConfig, notifications: NotificationQueue) -> Self {
        Self {
            config,
            transcript: Transcript::new(),
            edit_state: ChecklistEditState::new(),
            notifications,
        }
    }

    /// Handle a completed chat round trip
    ///
    /// Records both messages in the transcript and classifies the reply.
    /// On a positive verdict the reply is parsed and the editable model is
    /// replaced wholesale; returns whether a checklist is now live. A
    /// negative verdict leaves any previous model untouched.
    pub fn on_reply(
        &mut self,
        prompt: &str,
        reply: &str,
        came_from_checklist_route: bool,
    ) -> bool {
        self.transcript.push_user(prompt);
        self.transcript.push_assistant(reply);

        if !should_treat_as_checklist(prompt, reply, came_from_checklist_route) {
            return false;
        }

        let model = parse(reply);
        tracing::info!(
            sections = model.section_count(),
            items = model.item_count(),
            "reply parsed as checklist"
        );
        self.edit_state.replace_model(model);
        true
    }

    /// Validate the selection and produce the grouped confirmation view
    ///
    /// With nothing selected, raises an error toast and aborts: no partial
    /// submission, no model mutation. Must be called within a tokio
    /// runtime (the error toast schedules its own expiry).
    pub fn submit(&self) -> Result<Vec<SectionGroup>, SubmitError> {
        if !self.edit_state.has_any_selected() {
            tracing::warn!("submit requested with nothing selected");
            self.notifications.show(
                self.config.nothing_selected_message.clone(),
                ToastKind::Error,
                self.config.toast_duration,
            );
            return Err(SubmitError::NothingSelected);
        }

        let selection = self.edit_state.build_submission();
        Ok(ChecklistEditState::group_submission_by_section(&selection))
    }

    /// Acknowledge an accepted submission with a success toast
    ///
    /// Persisting the confirmed checklist is a collaborator concern.
    pub fn confirm_submission(&self) {
        self.notifications.show(
            self.config.saved_message.clone(),
            ToastKind::Success,
            self.config.toast_duration,
        );
    }

    /// Clear the conversation: transcript and checklist model both reset
    pub fn clear_conversation(&mut self) {
        self.transcript.clear();
        self.edit_state.clear();
    }

    /// Start a fresh session
    ///
    /// Identical to clearing the conversation; session identifiers are
    /// generated by a collaborator.
    pub fn new_session(&mut self) {
        self.clear_conversation();
    }

    /// Flow configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Conversation transcript
    #[inline]
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Live editable checklist state
    #[inline]
    #[must_use]
    pub fn edit_state(&self) -> &ChecklistEditState {
        &self.edit_state
    }

    /// Mutable access for user edit events
    #[inline]
    pub fn edit_state_mut(&mut self) -> &mut ChecklistEditState {
        &mut self.edit_state
    }

    /// Notification queue handle
    #[inline]
    #[must_use]
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }
}
