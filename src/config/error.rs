//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Classifier base URL must start with http:// or https://")]
    InvalidClassifierUrl,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Location timeout must be non-zero")]
    InvalidLocationTimeout,

    #[error("Local emergency number must contain digits")]
    InvalidEmergencyNumber,
}
