//! Assessment module: questionnaire progression, scoring, and severity bands.

mod engine;
mod severity;

pub use engine::{AssessmentEngine, AssessmentProgress};
pub use severity::{classify, ScoreResult, SeverityBand};
