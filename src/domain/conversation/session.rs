//! Conversation session: an append-only ordered message log.
//!
//! Messages are appended in the order their producing operation completes
//! and are never edited, deleted, or reordered. A session is exclusively
//! owned by one active user device; there is no cross-session sharing.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};

use super::message::{Message, Sender};

/// Greeting seeded into every new session.
const GREETING: &str = "Hi there! I'm your wellness assistant. How are you feeling today?";

/// An append-only conversation between the user and the assistant.
#[derive(Debug)]
pub struct ConversationSession {
    id: SessionId,
    messages: Vec<Message>,
    crisis_alert: bool,
    closed: bool,
}

impl ConversationSession {
    /// Creates a new session seeded with the assistant greeting.
    pub fn new() -> Self {
        let greeting = Message::new(Sender::Bot, GREETING)
            .expect("greeting is non-empty");
        Self {
            id: SessionId::new(),
            messages: vec![greeting],
            crisis_alert: false,
            closed: false,
        }
    }

    /// Returns the session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Appends a message to the log.
    ///
    /// # Errors
    ///
    /// - `SessionClosed` if the session has been torn down
    pub fn push(&mut self, message: Message) -> Result<(), DomainError> {
        if self.closed {
            return Err(DomainError::new(
                ErrorCode::SessionClosed,
                "Cannot append to a closed session",
            ));
        }
        self.messages.push(message);
        Ok(())
    }

    /// Returns all messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the most recent message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Raises the inline crisis alert.
    pub fn raise_crisis_alert(&mut self) {
        self.crisis_alert = true;
    }

    /// Clears the inline crisis alert.
    pub fn clear_crisis_alert(&mut self) {
        self.crisis_alert = false;
    }

    /// Returns true if the crisis alert is showing.
    pub fn crisis_alert(&self) -> bool {
        self.crisis_alert
    }

    /// Tears the session down. Further appends are rejected.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Returns true if the session has been torn down.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}
