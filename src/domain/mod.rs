//! Domain layer: pure decision logic with no I/O.

pub mod assessment;
pub mod catalog;
pub mod conversation;
pub mod escalation;
pub mod foundation;
pub mod triage;
