//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `WELLMIND` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use wellmind::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Classifier at {}", config.classifier.base_url);
//! ```

mod chat;
mod classifier;
mod error;
mod escalation;

pub use chat::ChatConfig;
pub use classifier::ClassifierConfig;
pub use error::{ConfigError, ValidationError};
pub use escalation::EscalationConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has working defaults, so a bare environment loads a
/// usable development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// External symptom classifier (base URL, key, timeout)
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Escalation flow (location timeout, local emergency number)
    #[serde(default)]
    pub escalation: EscalationConfig,

    /// Chat pacing (thinking delay)
    #[serde(default)]
    pub chat: ChatConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `WELLMIND` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WELLMIND__CLASSIFIER__BASE_URL=https://...` -> `classifier.base_url`
    /// - `WELLMIND__ESCALATION__LOCAL_EMERGENCY_NUMBER=112` ->
    ///   `escalation.local_emergency_number`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WELLMIND")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.classifier.validate()?;
        self.escalation.validate()?;
        Ok(())
    }
}
