//! In-memory conversation transcript
//!
//! Ordered log of the (prompt, reply) exchanges the flow has seen.
//! Nothing here is persisted; history storage is a collaborator concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique chat message identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Ulid);

impl MessageId {
    /// Generate a new message ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    /// The human user
    User,
    /// The remote assistant
    Assistant,
}

/// A single conversation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique id
    pub id: MessageId,
    /// Author
    pub role: ChatRole,
    /// Message text
    pub content: String,
    /// When the message was recorded
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message stamped with the current time
    #[must_use]
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered, in-memory message log
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Create an empty transcript
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user prompt
    pub fn push_user(&mut self, content: impl Into<String>) -> MessageId {
        self.push(ChatMessage::new(ChatRole::User, content))
    }

    /// Record an assistant reply
    pub fn push_assistant(&mut self, content: impl Into<String>) -> MessageId {
        self.push(ChatMessage::new(ChatRole::Assistant, content))
    }

    /// Messages in arrival order
    #[inline]
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when no messages have been recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop all messages
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    fn push(&mut self, message: ChatMessage) -> MessageId {
        let id = message.id;
        self.messages.push(message);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_keep_arrival_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("make me a checklist");
        transcript.push_assistant("- step one");

        let roles: Vec<ChatRole> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant]);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut transcript = Transcript::new();
        transcript.push_user("hello");
        transcript.clear();
        assert!(transcript.is_empty());
    }

    #[test]
    fn message_ids_are_unique() {
        let mut transcript = Transcript::new();
        let a = transcript.push_user("one");
        let b = transcript.push_user("one");
        assert_ne!(a, b);
    }
}
