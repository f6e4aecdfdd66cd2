//! Mock classifier for testing.
//!
//! Configurable to return queued payloads, inject failures, and record
//! the texts it was asked to analyze.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::triage::ClassifierPayload;
use crate::ports::{ClassifierError, SymptomClassifier};

/// A configured mock outcome.
#[derive(Debug)]
enum MockOutcome {
    Payload(ClassifierPayload),
    Failure(MockFailure),
}

/// Mock failure kinds for testing error handling.
#[derive(Debug, Clone)]
pub enum MockFailure {
    Network { message: String },
    Timeout { timeout_secs: u32 },
    Unavailable { message: String },
    UnusablePayload { message: String },
}

impl From<MockFailure> for ClassifierError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::Network { message } => ClassifierError::network(message),
            MockFailure::Timeout { timeout_secs } => ClassifierError::Timeout { timeout_secs },
            MockFailure::Unavailable { message } => ClassifierError::unavailable(message),
            MockFailure::UnusablePayload { message } => {
                ClassifierError::unusable_payload(message)
            }
        }
    }
}

/// Mock SymptomClassifier, consumed outcome by outcome in queue order.
///
/// An empty queue yields `Unavailable`, so a test that forgets to queue a
/// response fails loudly rather than hanging.
#[derive(Debug, Clone, Default)]
pub struct MockClassifier {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockClassifier {
    /// Creates an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful payload.
    pub fn with_payload(self, payload: ClassifierPayload) -> Self {
        self.outcomes
            .lock()
            .expect("mock outcome queue poisoned")
            .push_back(MockOutcome::Payload(payload));
        self
    }

    /// Queues a minimal diagnosis-only payload.
    pub fn with_diagnosis(self, diagnosis: impl Into<String>) -> Self {
        self.with_payload(ClassifierPayload {
            diagnosis: Some(diagnosis.into()),
            ..Default::default()
        })
    }

    /// Queues a failure.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        self.outcomes
            .lock()
            .expect("mock outcome queue poisoned")
            .push_back(MockOutcome::Failure(failure));
        self
    }

    /// Returns the texts analyzed so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

#[async_trait]
impl SymptomClassifier for MockClassifier {
    async fn analyze(&self, text: &str) -> Result<ClassifierPayload, ClassifierError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(text.to_string());

        let outcome = self
            .outcomes
            .lock()
            .expect("mock outcome queue poisoned")
            .pop_front();

        match outcome {
            Some(MockOutcome::Payload(payload)) => Ok(payload),
            Some(MockOutcome::Failure(failure)) => Err(failure.into()),
            None => Err(ClassifierError::unavailable("no mock outcome queued")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_queued_payloads_in_order() {
        let mock = MockClassifier::new()
            .with_diagnosis("Flu")
            .with_diagnosis("Cold");

        assert_eq!(mock.analyze("a").await.unwrap().diagnosis.unwrap(), "Flu");
        assert_eq!(mock.analyze("b").await.unwrap().diagnosis.unwrap(), "Cold");
    }

    #[tokio::test]
    async fn records_analyzed_texts() {
        let mock = MockClassifier::new().with_diagnosis("Flu");
        mock.analyze("Patient reports fever.").await.unwrap();
        assert_eq!(mock.calls(), vec!["Patient reports fever."]);
    }

    #[tokio::test]
    async fn injected_failure_is_returned() {
        let mock = MockClassifier::new().with_failure(MockFailure::Network {
            message: "reset".to_string(),
        });
        let err = mock.analyze("text").await.unwrap_err();
        assert!(matches!(err, ClassifierError::Network(_)));
    }

    #[tokio::test]
    async fn empty_queue_is_unavailable() {
        let mock = MockClassifier::new();
        let err = mock.analyze("text").await.unwrap_err();
        assert!(matches!(err, ClassifierError::Unavailable { .. }));
    }
}
