//! HTTP Classifier - reqwest implementation of the SymptomClassifier port.
//!
//! Posts the symptom text as JSON to the remote classifier endpoint and
//! decodes the loose payload. Transport failures map onto the port's
//! error taxonomy; no retries here, retry policy belongs to the caller.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::domain::triage::ClassifierPayload;
use crate::ports::{ClassifierError, SymptomClassifier};

/// Configuration for the HTTP classifier adapter.
#[derive(Debug, Clone)]
pub struct HttpClassifierConfig {
    /// Base URL of the classifier service.
    pub base_url: String,
    /// Optional bearer token.
    api_key: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpClassifierConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    symptoms: &'a str,
}

/// SymptomClassifier implementation over HTTP.
pub struct HttpClassifier {
    config: HttpClassifierConfig,
    client: Client,
}

impl HttpClassifier {
    /// Creates a new HTTP classifier adapter.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the HTTP client cannot be constructed
    pub fn new(config: HttpClassifierConfig) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClassifierError::unavailable(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn analyze_url(&self) -> String {
        format!("{}/analyze-symptoms", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SymptomClassifier for HttpClassifier {
    async fn analyze(&self, text: &str) -> Result<ClassifierPayload, ClassifierError> {
        let mut request = self
            .client
            .post(self.analyze_url())
            .json(&AnalyzeRequest { symptoms: text });

        if let Some(key) = &self.config.api_key {
            request = request.header(
                "Authorization",
                format!("Bearer {}", key.expose_secret()),
            );
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ClassifierError::Timeout {
                    timeout_secs: self.config.timeout.as_secs() as u32,
                }
            } else if e.is_connect() {
                ClassifierError::network(format!("Connection failed: {}", e))
            } else {
                ClassifierError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "classifier returned an error status");
            return Err(match status {
                StatusCode::BAD_REQUEST => ClassifierError::unusable_payload(body),
                _ => ClassifierError::unavailable(format!("HTTP {}: {}", status, body)),
            });
        }

        response
            .json::<ClassifierPayload>()
            .await
            .map_err(|e| ClassifierError::unusable_payload(e.to_string()))
    }
}
