//! Symptom classifier service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::classifier::HttpClassifierConfig;

/// External symptom classifier configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Base URL of the classifier service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional bearer token for the classifier service
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ClassifierConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a bearer token is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Build the adapter configuration, moving the key behind `Secret`
    pub fn to_adapter_config(&self) -> HttpClassifierConfig {
        let mut config =
            HttpClassifierConfig::new(self.base_url.clone()).with_timeout(self.timeout());
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            config = config.with_api_key(key.clone());
        }
        config
    }

    /// Validate classifier configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("CLASSIFIER_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidClassifierUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u64 {
    30
}
