//! Catalog module: static questionnaire and emergency resource data.
//!
//! Everything here is immutable reference data, built once and shared
//! read-only across sessions.

mod bank;
mod question;
mod resources;

pub use bank::{QuestionBank, GAD7, PHQ9};
pub use question::{Assessment, Question};
pub use resources::{emergency_resources, EmergencyResource};
