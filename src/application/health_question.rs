//! Free-form health Q&A over the classifier boundary.
//!
//! Unlike the triage flow, a classifier failure here does not fail the
//! exchange: the service substitutes a generic supportive fallback and
//! flags the answer for review, so the conversation keeps moving.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::triage::{normalize, AnalysisResult, Urgency};
use crate::ports::SymptomClassifier;

/// Shown when the classifier fails or returns nothing usable.
const FALLBACK_ANSWER: &str = "Sorry, something went wrong. Please try again.";

/// One answered health question.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthAnswer {
    /// The answer text shown to the user.
    pub text: String,
    /// True when the fallback was substituted for a real answer.
    pub needs_review: bool,
}

/// Answers free-form health questions.
pub struct HealthQuestionService {
    classifier: Arc<dyn SymptomClassifier>,
}

impl HealthQuestionService {
    /// Creates a service over the given classifier boundary.
    pub fn new(classifier: Arc<dyn SymptomClassifier>) -> Self {
        Self { classifier }
    }

    /// Answers one question.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the question is empty or whitespace
    pub async fn ask(&self, question: &str) -> Result<HealthAnswer, DomainError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::validation(
                "question",
                "Question must not be empty",
            ));
        }

        let analysis = match self.classifier.analyze(question).await {
            Ok(payload) => normalize(payload),
            Err(err) => {
                tracing::warn!(%err, "health question classifier call failed");
                return Ok(HealthAnswer {
                    text: FALLBACK_ANSWER.to_string(),
                    needs_review: true,
                });
            }
        };

        match analysis {
            Ok(result) => Ok(HealthAnswer {
                text: compose_answer(&result),
                needs_review: false,
            }),
            Err(err) => {
                tracing::warn!(%err, "health question payload was unusable");
                Ok(HealthAnswer {
                    text: FALLBACK_ANSWER.to_string(),
                    needs_review: true,
                })
            }
        }
    }
}

fn compose_answer(result: &AnalysisResult) -> String {
    let mut text = format!("This may be related to {}.", result.condition);
    if !result.recommendations.is_empty() {
        text.push_str(" You could try the following:");
        for recommendation in &result.recommendations {
            let _ = write!(text, "\n- {}", recommendation);
        }
    }
    match result.urgency {
        Urgency::Low => {}
        Urgency::Medium => {
            text.push_str("\nConsider scheduling a consultation soon.");
        }
        Urgency::High => {
            text.push_str("\nPlease seek medical attention promptly.");
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::classifier::{MockClassifier, MockFailure};
    use crate::domain::triage::ClassifierPayload;

    #[tokio::test]
    async fn empty_question_is_rejected_without_a_call() {
        let mock = MockClassifier::new();
        let service = HealthQuestionService::new(Arc::new(mock.clone()));

        assert!(service.ask("   ").await.is_err());
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn successful_answer_is_composed_from_the_analysis() {
        let mock = MockClassifier::new().with_payload(ClassifierPayload {
            condition: Some("seasonal allergies".to_string()),
            recommendations: Some(vec!["Stay hydrated".to_string()]),
            urgency: Some(Urgency::Medium),
            ..Default::default()
        });
        let service = HealthQuestionService::new(Arc::new(mock));

        let answer = service.ask("Why do I keep sneezing?").await.unwrap();
        assert!(!answer.needs_review);
        assert!(answer.text.contains("seasonal allergies"));
        assert!(answer.text.contains("Stay hydrated"));
        assert!(answer.text.contains("consultation"));
    }

    #[tokio::test]
    async fn classifier_failure_substitutes_the_fallback() {
        let mock = MockClassifier::new().with_failure(MockFailure::Network {
            message: "connection refused".to_string(),
        });
        let service = HealthQuestionService::new(Arc::new(mock));

        let answer = service.ask("Is this serious?").await.unwrap();
        assert!(answer.needs_review);
        assert_eq!(answer.text, FALLBACK_ANSWER);
    }

    #[tokio::test]
    async fn unusable_payload_substitutes_the_fallback() {
        let mock = MockClassifier::new().with_payload(ClassifierPayload::default());
        let service = HealthQuestionService::new(Arc::new(mock));

        let answer = service.ask("Is this serious?").await.unwrap();
        assert!(answer.needs_review);
        assert_eq!(answer.text, FALLBACK_ANSWER);
    }
}
