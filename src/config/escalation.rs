//! Escalation flow configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Escalation flow configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EscalationConfig {
    /// How long to wait for a location fix before proceeding without one
    #[serde(default = "default_location_timeout")]
    pub location_timeout_secs: u64,

    /// Number dialed by the "call local emergency services" action
    #[serde(default = "default_emergency_number")]
    pub local_emergency_number: String,
}

impl EscalationConfig {
    /// Get the location timeout as Duration
    pub fn location_timeout(&self) -> Duration {
        Duration::from_secs(self.location_timeout_secs)
    }

    /// Validate escalation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.location_timeout_secs == 0 {
            return Err(ValidationError::InvalidLocationTimeout);
        }
        if !self
            .local_emergency_number
            .chars()
            .any(|c| c.is_ascii_digit())
        {
            return Err(ValidationError::InvalidEmergencyNumber);
        }
        Ok(())
    }
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            location_timeout_secs: default_location_timeout(),
            local_emergency_number: default_emergency_number(),
        }
    }
}

fn default_location_timeout() -> u64 {
    10
}

fn default_emergency_number() -> String {
    "911".to_string()
}
