//! Foundation module: shared value objects and traits for the domain layer.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MessageId, SessionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
