//! Provider error types and HTTP error mapping
//!
//! Upstream failures are typed here and absorbed by the orchestrator; they
//! only ever reach a caller when provider construction itself fails.

use thiserror::Error;

/// Errors from the upstream model provider
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API error ({status}): {message}")]
    Api {
        /// Upstream HTTP status
        status: u16,
        /// Upstream message or body
        message: String,
    },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ProviderError {
    /// Stable identifier for logs and metrics.
    pub fn error_type(&self) -> &'static str {
        match self {
            ProviderError::Api { .. } => "api_error",
            ProviderError::Authentication(_) => "authentication_error",
            ProviderError::RateLimited(_) => "rate_limit_error",
            ProviderError::InvalidRequest(_) => "invalid_request_error",
            ProviderError::Network(_) => "network_error",
            ProviderError::Timeout(_) => "timeout_error",
            ProviderError::Configuration(_) => "configuration_error",
        }
    }

    /// Whether a retry could plausibly succeed.
    ///
    /// The core never retries (caller policy), but the classification is
    /// part of the provider contract.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProviderError::RateLimited(_)
                | ProviderError::Network(_)
                | ProviderError::Timeout(_)
                | ProviderError::Api { status: 500..=599, .. }
        )
    }

    /// Map an HTTP error status from the provider to a typed error.
    pub fn from_http_status(status: u16, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("HTTP error {}", status)
        } else {
            body.to_string()
        };

        match status {
            400 => ProviderError::InvalidRequest(message),
            401 | 403 => ProviderError::Authentication(message),
            429 => ProviderError::RateLimited(message),
            _ => ProviderError::Api { status, message },
        }
    }
}
