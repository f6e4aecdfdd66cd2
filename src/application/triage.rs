//! Symptom triage adapter: intake to canonical analysis.
//!
//! Builds the natural-language prompt from a validated intake, delegates
//! to the external classifier, and normalizes the loose payload into one
//! canonical `AnalysisResult`. External failures propagate as typed
//! errors; the adapter never retries, so the caller can decide whether
//! to offer a retry affordance.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::domain::triage::{normalize, AnalysisResult, SymptomIntake};
use crate::ports::{ClassifierError, SymptomClassifier};

/// Failures surfaced by the triage flow.
#[derive(Debug, Error)]
pub enum TriageError {
    /// The external classifier call failed.
    #[error("classifier call failed: {0}")]
    Classifier(#[from] ClassifierError),

    /// The payload arrived but could not be normalized.
    #[error(transparent)]
    Normalization(#[from] DomainError),
}

impl TriageError {
    /// Returns true if retrying the triage could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            TriageError::Classifier(err) => err.is_retryable(),
            TriageError::Normalization(_) => false,
        }
    }
}

/// Turns structured intake into a normalized analysis record.
pub struct SymptomTriageAdapter {
    classifier: Arc<dyn SymptomClassifier>,
}

impl SymptomTriageAdapter {
    /// Creates an adapter over the given classifier boundary.
    pub fn new(classifier: Arc<dyn SymptomClassifier>) -> Self {
        Self { classifier }
    }

    /// Runs one triage: prompt, remote call, normalization.
    ///
    /// # Errors
    ///
    /// - `Classifier` if the external call fails
    /// - `Normalization` if the payload lacks a usable primary field
    pub async fn triage(&self, intake: &SymptomIntake) -> Result<AnalysisResult, TriageError> {
        let prompt = intake.to_prompt();
        tracing::debug!(symptom = intake.main_symptom(), "running symptom triage");

        let payload = self.classifier.analyze(&prompt).await?;
        let result = normalize(payload)?;

        tracing::info!(
            condition = %result.condition,
            urgency = ?result.urgency,
            "symptom triage complete"
        );
        Ok(result)
    }
}
