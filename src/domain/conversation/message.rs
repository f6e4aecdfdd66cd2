//! Message entity for conversation sessions.
//!
//! Messages are immutable records of user/bot exchanges. Each message has
//! a sender, text, and timestamp, and is identified by a unique id.

use crate::domain::foundation::{DomainError, MessageId, Timestamp};
use serde::{Deserialize, Serialize};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The person chatting.
    User,
    /// The wellness assistant (including system hand-off notices).
    Bot,
}

/// An immutable message within a conversation session.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `text` is non-empty (validated at construction)
/// - `timestamp` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    sender: Sender,
    text: String,
    timestamp: Timestamp,
}

impl Message {
    /// Creates a new message with the given sender and text.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if text is empty or whitespace
    pub fn new(sender: Sender, text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::validation(
                "text",
                "Message text cannot be empty",
            ));
        }

        Ok(Self {
            id: MessageId::new(),
            sender,
            text,
            timestamp: Timestamp::now(),
        })
    }

    /// Creates a user message.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if text is empty or whitespace
    pub fn user(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Sender::User, text)
    }

    /// Creates a bot message.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if text is empty or whitespace
    pub fn bot(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Sender::Bot, text)
    }

    /// Returns the message id.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the sender.
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when the message was created.
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Returns true if this message is from the user.
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
