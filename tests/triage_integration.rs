//! Symptom triage flow over the mock classifier boundary.

use std::sync::Arc;

use wellmind::adapters::classifier::{MockClassifier, MockFailure};
use wellmind::application::{HealthQuestionService, SymptomTriageAdapter, TriageError};
use wellmind::domain::triage::{ClassifierPayload, SymptomIntake, SymptomSeverity, Urgency};

#[tokio::test]
async fn intake_flows_through_prompt_call_and_normalization() {
    let mock = MockClassifier::new().with_payload(ClassifierPayload {
        diagnosis: Some("Viral pharyngitis".to_string()),
        confidence: Some(0.85),
        recommendations: Some(vec![
            "Rest your voice".to_string(),
            "Warm salt water gargles".to_string(),
        ]),
        urgency: Some(Urgency::Low),
        ..Default::default()
    });
    let adapter = SymptomTriageAdapter::new(Arc::new(mock.clone()));

    let intake = SymptomIntake::new(
        "sore throat",
        "2 days",
        SymptomSeverity::Mild,
        Some("worse in the morning".to_string()),
    )
    .unwrap();

    let result = adapter.triage(&intake).await.unwrap();
    assert_eq!(result.condition, "Viral pharyngitis");
    assert_eq!(result.confidence, 0.85);
    assert_eq!(result.recommendations.len(), 2);

    assert_eq!(
        mock.calls(),
        vec![
            "Patient reports sore throat. This has been occurring for 2 days. \
             The severity is mild. Additional notes: worse in the morning"
        ]
    );
}

#[tokio::test]
async fn sparse_payload_is_filled_with_defaults() {
    let mock = MockClassifier::new().with_payload(ClassifierPayload {
        condition: Some("Common cold".to_string()),
        ..Default::default()
    });
    let adapter = SymptomTriageAdapter::new(Arc::new(mock));

    let intake =
        SymptomIntake::new("runny nose", "1 day", SymptomSeverity::Mild, None).unwrap();
    let result = adapter.triage(&intake).await.unwrap();

    assert_eq!(result.condition, "Common cold");
    assert_eq!(result.confidence, 0.8);
    assert!(result.recommendations.is_empty());
    assert_eq!(result.urgency, Urgency::Low);
}

#[tokio::test]
async fn invalid_intake_never_reaches_the_classifier() {
    let mock = MockClassifier::new();

    assert!(SymptomIntake::new("ow", "2 days", SymptomSeverity::Mild, None).is_err());
    assert!(SymptomIntake::new("headache", "  ", SymptomSeverity::Mild, None).is_err());
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn classifier_outage_is_a_retryable_triage_error() {
    let mock = MockClassifier::new()
        .with_failure(MockFailure::Unavailable {
            message: "503".to_string(),
        })
        .with_diagnosis("Tension headache");
    let adapter = SymptomTriageAdapter::new(Arc::new(mock));

    let intake =
        SymptomIntake::new("headache", "3 days", SymptomSeverity::Moderate, None).unwrap();

    let err = adapter.triage(&intake).await.unwrap_err();
    assert!(matches!(err, TriageError::Classifier(_)));
    assert!(err.is_retryable());

    // The caller retries; the next queued outcome succeeds.
    let result = adapter.triage(&intake).await.unwrap();
    assert_eq!(result.condition, "Tension headache");
}

#[tokio::test]
async fn health_question_degrades_to_fallback_on_outage() {
    let mock = MockClassifier::new().with_failure(MockFailure::Timeout { timeout_secs: 30 });
    let service = HealthQuestionService::new(Arc::new(mock));

    let answer = service.ask("What helps with a sore throat?").await.unwrap();
    assert!(answer.needs_review);
    assert_eq!(answer.text, "Sorry, something went wrong. Please try again.");
}
