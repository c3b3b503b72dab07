//! Groq provider configuration
//!
//! Key pool, API base, and timeout settings, with environment fallbacks.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Highest `GROQ_KEY_{n}` environment slot probed when loading the pool
const MAX_KEY_SLOTS: usize = 6;

/// Groq provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    /// API key pool; one key is picked per request
    #[serde(default)]
    pub api_keys: Vec<String>,

    /// API base URL (default: https://api.groq.com/openai/v1)
    pub api_base: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_keys: Vec::new(),
            api_base: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl GroqConfig {
    /// Load settings from environment variables.
    ///
    /// Keys come from the numbered slots `GROQ_KEY_1` through `GROQ_KEY_6`;
    /// empty slots are skipped. `GROQ_API_BASE` and `GROQ_TIMEOUT_SECS`
    /// override their defaults.
    pub fn from_env() -> Self {
        let api_keys = (1..=MAX_KEY_SLOTS)
            .filter_map(|slot| std::env::var(format!("GROQ_KEY_{}", slot)).ok())
            .filter(|key| !key.is_empty())
            .collect();

        let timeout_secs = std::env::var("GROQ_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(default_timeout);

        Self {
            api_keys,
            api_base: std::env::var("GROQ_API_BASE").ok(),
            timeout_secs,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_keys.is_empty() {
            return Err("no Groq API keys configured".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    /// API base with the production default.
    pub fn get_api_base(&self) -> String {
        self.api_base
            .clone()
            .unwrap_or_else(|| "https://api.groq.com/openai/v1".to_string())
    }

    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout() -> u64 {
    30
}
