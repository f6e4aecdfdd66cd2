//! Score-to-severity-band classification.
//!
//! Thresholds follow the standard PHQ-9 and GAD-7 scoring bands. The
//! mapping is fixed and ascending: a higher score never yields a lower
//! band.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::{GAD7, PHQ9};

/// Named severity tier derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
    /// Sentinel for an unrecognized assessment kind.
    Unknown,
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeverityBand::Minimal => "Minimal",
            SeverityBand::Mild => "Mild",
            SeverityBand::Moderate => "Moderate",
            SeverityBand::ModeratelySevere => "Moderately Severe",
            SeverityBand::Severe => "Severe",
            SeverityBand::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// Result of scoring a completed assessment.
///
/// Derived on demand from an answer set; never persisted independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: i32,
    pub band: SeverityBand,
    pub advice: String,
}

/// Maps a total score to a severity band and advisory text.
///
/// Unknown assessment kinds yield the `Unknown` band with generic advice.
pub fn classify(assessment_id: &str, score: i32) -> ScoreResult {
    let (band, advice) = match assessment_id {
        PHQ9 => classify_depression(score),
        GAD7 => classify_anxiety(score),
        _ => (SeverityBand::Unknown, "No recommendation available."),
    };

    ScoreResult {
        score,
        band,
        advice: advice.to_string(),
    }
}

fn classify_depression(score: i32) -> (SeverityBand, &'static str) {
    if score <= 4 {
        (
            SeverityBand::Minimal,
            "Your depression symptoms are minimal. Keep monitoring your mood and practice self-care.",
        )
    } else if score <= 9 {
        (
            SeverityBand::Mild,
            "Mild depression symptoms. Consider lifestyle changes and regular check-ins.",
        )
    } else if score <= 14 {
        (
            SeverityBand::Moderate,
            "Moderate symptoms. It may help to talk to a counselor or therapist.",
        )
    } else if score <= 19 {
        (
            SeverityBand::ModeratelySevere,
            "Moderately severe symptoms. Professional support is recommended.",
        )
    } else {
        (
            SeverityBand::Severe,
            "Severe symptoms. Please seek help from a mental health professional as soon as possible.",
        )
    }
}

fn classify_anxiety(score: i32) -> (SeverityBand, &'static str) {
    if score <= 4 {
        (
            SeverityBand::Minimal,
            "Minimal anxiety. Keep up your self-care routines.",
        )
    } else if score <= 9 {
        (
            SeverityBand::Mild,
            "Mild anxiety. Try relaxation techniques and monitor your symptoms.",
        )
    } else if score <= 14 {
        (
            SeverityBand::Moderate,
            "Moderate anxiety. Consider speaking with a counselor.",
        )
    } else {
        (
            SeverityBand::Severe,
            "Severe anxiety. Please consult a mental health professional.",
        )
    }
}
