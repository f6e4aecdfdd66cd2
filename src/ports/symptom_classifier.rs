//! Symptom Classifier Port - boundary to the external classifier service.
//!
//! The remote service accepts a natural-language symptom description and
//! returns a loose, partial record. Implementations translate transport
//! failures into `ClassifierError`; shape normalization happens in the
//! triage domain, never here.

use async_trait::async_trait;

use crate::domain::triage::ClassifierPayload;

/// Port for external symptom classification.
#[async_trait]
pub trait SymptomClassifier: Send + Sync {
    /// Sends the symptom text to the classifier and returns its raw payload.
    ///
    /// The call suspends until the remote response or failure arrives;
    /// callers must not mutate session state while a call is pending.
    async fn analyze(&self, text: &str) -> Result<ClassifierPayload, ClassifierError>;
}

/// Failures at the classifier boundary.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// Service is unreachable or returned a server error.
    #[error("classifier unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Response arrived but could not be decoded.
    #[error("unusable payload: {0}")]
    UnusablePayload(String),
}

impl ClassifierError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates an unusable payload error.
    pub fn unusable_payload(message: impl Into<String>) -> Self {
        Self::UnusablePayload(message.into())
    }

    /// Returns true if retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClassifierError::Network(_)
                | ClassifierError::Timeout { .. }
                | ClassifierError::Unavailable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_are_retryable() {
        assert!(ClassifierError::network("reset").is_retryable());
        assert!(ClassifierError::Timeout { timeout_secs: 30 }.is_retryable());
        assert!(ClassifierError::unavailable("503").is_retryable());
    }

    #[test]
    fn bad_payload_is_not_retryable() {
        assert!(!ClassifierError::unusable_payload("not json").is_retryable());
    }

    #[test]
    fn errors_display_their_details() {
        assert_eq!(
            ClassifierError::network("connection refused").to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            ClassifierError::Timeout { timeout_secs: 30 }.to_string(),
            "request timed out after 30s"
        );
    }
}
