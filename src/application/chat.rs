//! Chat service: session orchestration around the conversation engine.
//!
//! Appends the user message immediately, then schedules the bot reply
//! behind a modeled "thinking" delay so the caller can render a typing
//! indicator. The deferred append is a cancellable task bound to the
//! session's lifetime: tearing the session down aborts outstanding
//! timers, and a timer that does fire re-checks the session before
//! writing, so a discarded session never receives an orphaned message.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::sleep;

use crate::domain::conversation::{
    ConversationEngine, ConversationSession, Message, SupportCategory,
};
use crate::domain::foundation::DomainError;

/// Delay before the bot reply lands, mirroring a human-paced response.
const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(1500);

/// Handle to a scheduled bot reply.
#[derive(Debug)]
pub struct PendingReply {
    handle: JoinHandle<()>,
}

impl PendingReply {
    /// Cancels the scheduled append. The bot message will not land.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Waits until the reply has been appended (or the task was aborted).
    pub async fn settled(self) {
        // Abort surfaces as a JoinError; either way the timer is done.
        let _ = self.handle.await;
    }
}

/// Outcome of sending one user message.
#[derive(Debug)]
pub struct SendOutcome {
    /// Category the message classified into.
    pub category: SupportCategory,
    /// True if crisis language was detected.
    pub crisis: bool,
    /// The reply text that will land once the delay elapses.
    pub reply_text: String,
    /// Handle to the scheduled bot message.
    pub pending: PendingReply,
}

/// Orchestrates a single conversation session.
pub struct ChatService {
    session: Arc<Mutex<ConversationSession>>,
    engine: Mutex<ConversationEngine>,
    thinking_delay: Duration,
    scheduled: Mutex<Vec<AbortHandle>>,
}

impl ChatService {
    /// Creates a service with a fresh session and entropy-seeded replies.
    pub fn new() -> Self {
        Self::with_engine(ConversationEngine::new())
    }

    /// Creates a service with a caller-supplied engine (e.g. seeded).
    pub fn with_engine(engine: ConversationEngine) -> Self {
        Self {
            session: Arc::new(Mutex::new(ConversationSession::new())),
            engine: Mutex::new(engine),
            thinking_delay: DEFAULT_THINKING_DELAY,
            scheduled: Mutex::new(Vec::new()),
        }
    }

    /// Creates a service paced by the given configuration.
    pub fn from_config(config: &crate::config::ChatConfig) -> Self {
        Self::new().with_thinking_delay(config.thinking_delay())
    }

    /// Overrides the thinking delay (tests use zero or paused time).
    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    /// Sends a user message and schedules the bot reply.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the text is empty or whitespace
    /// - `SessionClosed` if the session has been torn down
    pub fn send(&self, text: &str) -> Result<SendOutcome, DomainError> {
        let user_message = Message::user(text)?;

        let reply = {
            let mut session = self.lock_session();
            session.push(user_message)?;

            let mut engine = self.engine.lock().expect("engine lock poisoned");
            let reply = engine.reply_to(text);
            if reply.is_crisis() {
                session.raise_crisis_alert();
            }
            reply
        };

        let session = Arc::clone(&self.session);
        let delay = self.thinking_delay;
        let bot_text = reply.text.clone();
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            let mut session = session.lock().expect("session lock poisoned");
            if session.is_closed() {
                return;
            }
            match Message::bot(&bot_text) {
                Ok(message) => {
                    // Closed was checked above; push cannot fail here.
                    let _ = session.push(message);
                }
                Err(err) => tracing::error!(%err, "dropping malformed bot reply"),
            }
        });

        self.scheduled
            .lock()
            .expect("scheduled lock poisoned")
            .push(handle.abort_handle());

        Ok(SendOutcome {
            category: reply.category,
            crisis: reply.is_crisis(),
            reply_text: reply.text,
            pending: PendingReply { handle },
        })
    }

    /// Tears the session down and aborts outstanding reply timers.
    pub fn close(&self) {
        self.lock_session().close();
        let mut scheduled = self.scheduled.lock().expect("scheduled lock poisoned");
        for handle in scheduled.drain(..) {
            handle.abort();
        }
    }

    /// Locks the session for inspection or cross-service operations
    /// (e.g. the escalation controller's counselor hand-off).
    pub fn lock_session(&self) -> MutexGuard<'_, ConversationSession> {
        self.session.lock().expect("session lock poisoned")
    }

    /// Snapshot of the message texts, in append order.
    pub fn message_texts(&self) -> Vec<String> {
        self.lock_session()
            .messages()
            .iter()
            .map(|m| m.text().to_string())
            .collect()
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::Sender;

    fn service() -> ChatService {
        ChatService::with_engine(ConversationEngine::with_seed(7))
            .with_thinking_delay(Duration::from_millis(50))
    }

    #[tokio::test]
    async fn user_message_lands_before_the_reply() {
        let chat = service();
        let outcome = chat.send("I feel stressed").unwrap();

        {
            let session = chat.lock_session();
            let last = session.last_message().unwrap();
            assert_eq!(last.sender(), Sender::User);
            assert_eq!(last.text(), "I feel stressed");
        }

        outcome.pending.settled().await;
        let session = chat.lock_session();
        let last = session.last_message().unwrap();
        assert_eq!(last.sender(), Sender::Bot);
    }

    #[tokio::test]
    async fn crisis_message_raises_the_alert_and_signals() {
        let chat = service();
        let outcome = chat.send("I want to end my life").unwrap();

        assert!(outcome.crisis);
        assert_eq!(outcome.category, SupportCategory::Crisis);
        assert!(chat.lock_session().crisis_alert());
        outcome.pending.settled().await;
    }

    #[tokio::test]
    async fn cancelled_reply_never_lands() {
        let chat = service();
        let outcome = chat.send("hello there").unwrap();

        outcome.pending.cancel();
        outcome.pending.settled().await;

        let texts = chat.message_texts();
        // greeting + user message only
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[1], "hello there");
    }

    #[tokio::test]
    async fn closing_the_session_suppresses_in_flight_replies() {
        let chat = service();
        let outcome = chat.send("hello there").unwrap();

        chat.close();
        outcome.pending.settled().await;

        assert_eq!(chat.message_texts().len(), 2);
    }

    #[tokio::test]
    async fn send_after_close_is_rejected() {
        let chat = service();
        chat.close();
        assert!(chat.send("anyone there?").is_err());
    }

    #[tokio::test]
    async fn empty_message_is_rejected_locally() {
        let chat = service();
        assert!(chat.send("   ").is_err());
        assert_eq!(chat.message_texts().len(), 1);
    }

    #[tokio::test]
    async fn interleaved_sends_append_in_completion_order() {
        let chat = ChatService::with_engine(ConversationEngine::with_seed(1))
            .with_thinking_delay(Duration::from_millis(20));

        let first = chat.send("I can't sleep").unwrap();
        let second = chat.send("also feeling stressed").unwrap();

        first.pending.settled().await;
        second.pending.settled().await;

        let texts = chat.message_texts();
        // greeting, two user messages, two bot replies
        assert_eq!(texts.len(), 5);
        assert_eq!(texts[1], "I can't sleep");
        assert_eq!(texts[2], "also feeling stressed");
    }
}
