//! Canonical analysis result and classifier payload normalization.
//!
//! The external classifier returns a loose, partial record. Nothing past
//! this module ever sees that shape: normalization maps it into exactly
//! one canonical `AnalysisResult`, filling defaults for absent fields.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Default confidence when the classifier omits one.
const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Urgency tier passed through from the external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Consultation fee quote attached to an analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsultationFees {
    pub initial: f64,
    #[serde(alias = "followUp")]
    pub follow_up: f64,
}

/// Raw, partial payload from the external classifier boundary.
///
/// Field presence is not guaranteed; `diagnosis` and `condition` are
/// alternative spellings of the primary field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifierPayload {
    pub diagnosis: Option<String>,
    pub condition: Option<String>,
    pub confidence: Option<f64>,
    pub recommendations: Option<Vec<String>>,
    pub urgency: Option<Urgency>,
    pub medications: Option<Vec<String>>,
    #[serde(alias = "consultationFees")]
    pub consultation_fees: Option<ConsultationFees>,
}

/// Canonical, fully-populated analysis record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub condition: String,
    /// Confidence in [0, 1].
    pub confidence: f64,
    pub urgency: Urgency,
    pub recommendations: Vec<String>,
    pub medications: Vec<String>,
    pub consultation_fees: ConsultationFees,
}

/// Normalizes a raw classifier payload into the canonical result.
///
/// - primary field: `diagnosis`, falling back to `condition`
/// - `confidence` defaults to 0.8 and is clamped into [0, 1]
/// - `recommendations` and `medications` default to empty
/// - `urgency` is passed through, defaulting to `Low` when absent
/// - `consultation_fees` defaults to zero fees
///
/// # Errors
///
/// - `UnusablePayload` if neither `diagnosis` nor `condition` is present
pub fn normalize(payload: ClassifierPayload) -> Result<AnalysisResult, DomainError> {
    let condition = payload
        .diagnosis
        .or(payload.condition)
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::UnusablePayload,
                "Classifier payload carries neither 'diagnosis' nor 'condition'",
            )
        })?;

    Ok(AnalysisResult {
        condition,
        confidence: payload.confidence.unwrap_or(DEFAULT_CONFIDENCE).clamp(0.0, 1.0),
        urgency: payload.urgency.unwrap_or(Urgency::Low),
        recommendations: payload.recommendations.unwrap_or_default(),
        medications: payload.medications.unwrap_or_default(),
        consultation_fees: payload.consultation_fees.unwrap_or_default(),
    })
}
