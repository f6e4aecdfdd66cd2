//! Application services: orchestration of domain logic and ports.

mod chat;
mod escalation;
mod health_question;
mod triage;

pub use chat::{ChatService, PendingReply, SendOutcome};
pub use escalation::EscalationController;
pub use health_question::{HealthAnswer, HealthQuestionService};
pub use triage::{SymptomTriageAdapter, TriageError};
