//! Conversation module: messages, sessions, crisis detection, and the
//! keyword-based support classifier.

pub mod crisis;

mod classifier;
mod engine;
mod message;
mod session;

pub use classifier::{classify, SupportCategory};
pub use engine::{ConversationEngine, Reply};
pub use message::{Message, Sender};
pub use session::ConversationSession;
