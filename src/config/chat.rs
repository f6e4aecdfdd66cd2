//! Chat pacing configuration

use serde::Deserialize;
use std::time::Duration;

/// Chat pacing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Delay before a bot reply lands, in milliseconds
    #[serde(default = "default_thinking_delay")]
    pub thinking_delay_ms: u64,
}

impl ChatConfig {
    /// Get the thinking delay as Duration
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay(),
        }
    }
}

fn default_thinking_delay() -> u64 {
    1500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.thinking_delay(), Duration::from_millis(1500));
    }
}
