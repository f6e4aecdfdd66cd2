//! Structured symptom intake.
//!
//! Intake is validated locally before anything reaches the external
//! classifier: malformed input never produces a remote call.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

const MIN_SYMPTOM_LEN: usize = 3;

/// Self-reported severity of the main symptom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomSeverity {
    Mild,
    Moderate,
    Severe,
}

impl fmt::Display for SymptomSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SymptomSeverity::Mild => "mild",
            SymptomSeverity::Moderate => "moderate",
            SymptomSeverity::Severe => "severe",
        };
        write!(f, "{}", s)
    }
}

/// Validated symptom intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomIntake {
    main_symptom: String,
    duration: String,
    severity: SymptomSeverity,
    additional_info: Option<String>,
}

impl SymptomIntake {
    /// Creates a validated intake record.
    ///
    /// # Errors
    ///
    /// - `TooShort` if the main symptom is under 3 characters
    /// - `EmptyField` if the duration is empty
    pub fn new(
        main_symptom: impl Into<String>,
        duration: impl Into<String>,
        severity: SymptomSeverity,
        additional_info: Option<String>,
    ) -> Result<Self, ValidationError> {
        let main_symptom = main_symptom.into();
        let duration = duration.into();

        let symptom_len = main_symptom.trim().chars().count();
        if symptom_len < MIN_SYMPTOM_LEN {
            return Err(ValidationError::too_short(
                "main_symptom",
                MIN_SYMPTOM_LEN,
                symptom_len,
            ));
        }
        if duration.trim().is_empty() {
            return Err(ValidationError::empty_field("duration"));
        }

        let additional_info =
            additional_info.filter(|info| !info.trim().is_empty());

        Ok(Self {
            main_symptom,
            duration,
            severity,
            additional_info,
        })
    }

    /// Returns the main symptom description.
    pub fn main_symptom(&self) -> &str {
        &self.main_symptom
    }

    /// Returns how long the symptom has been occurring.
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Returns the self-reported severity.
    pub fn severity(&self) -> SymptomSeverity {
        self.severity
    }

    /// Returns the optional free-text notes.
    pub fn additional_info(&self) -> Option<&str> {
        self.additional_info.as_deref()
    }

    /// Builds the natural-language prompt sent to the classifier.
    pub fn to_prompt(&self) -> String {
        let mut prompt = format!(
            "Patient reports {}. This has been occurring for {}. The severity is {}. ",
            self.main_symptom, self.duration, self.severity
        );
        if let Some(info) = &self.additional_info {
            prompt.push_str(&format!("Additional notes: {}", info));
        }
        prompt
    }
}
