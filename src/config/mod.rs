//! Configuration management for the service
//!
//! Values come from environment variables (optionally via a `.env` file),
//! matching the deployment surface of the reference system: intake limits
//! here, provider settings under [`GroqConfig`].

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::providers::GroqConfig;
use crate::utils::error::{Result, ServiceError};

/// Main configuration struct for the service core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum admissible code size in characters
    #[serde(default = "default_max_code_size")]
    pub max_code_size: usize,

    /// Per-identity requests allowed per 60-second window
    #[serde(default = "default_rate_limit_rpm")]
    pub rate_limit_rpm: u32,

    /// Groq provider settings
    #[serde(default)]
    pub groq: GroqConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_code_size: default_max_code_size(),
            rate_limit_rpm: default_rate_limit_rpm(),
            groq: GroqConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `MAX_CODE_SIZE`, `RATE_LIMIT`, and the `GROQ_*` variables;
    /// a `.env` file in the working directory is honored if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            max_code_size: read_env("MAX_CODE_SIZE")?.unwrap_or_else(default_max_code_size),
            rate_limit_rpm: read_env("RATE_LIMIT")?.unwrap_or_else(default_rate_limit_rpm),
            groq: GroqConfig::from_env(),
        };

        config.validate()?;
        debug!(
            "configuration loaded: max_code_size={}, rate_limit_rpm={}, {} Groq key(s)",
            config.max_code_size,
            config.rate_limit_rpm,
            config.groq.api_keys.len()
        );
        Ok(config)
    }

    /// Validate the entire configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_code_size == 0 {
            return Err(ServiceError::Config(
                "MAX_CODE_SIZE must be greater than 0".to_string(),
            ));
        }
        if self.rate_limit_rpm == 0 {
            return Err(ServiceError::Config(
                "RATE_LIMIT must be greater than 0".to_string(),
            ));
        }
        self.groq.validate().map_err(ServiceError::Config)?;
        Ok(())
    }
}

/// Parse an optional environment variable, erroring on malformed values.
fn read_env<T: FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|err| ServiceError::Config(format!("invalid {}: {}", name, err))),
        Err(_) => Ok(None),
    }
}

fn default_max_code_size() -> usize {
    50_000
}

fn default_rate_limit_rpm() -> u32 {
    10
}
