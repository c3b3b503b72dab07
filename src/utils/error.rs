//! Error handling for the service core
//!
//! This module defines the errors surfaced to the embedding routing layer.
//! Only admission and throttling errors are ever user-visible; upstream
//! model failures are absorbed by the orchestrator before they get here.

use thiserror::Error;

use crate::core::providers::ProviderError;
use crate::core::validator::ValidationError;

/// Result type alias for the service
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Main error type for the service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Admission rejections (size, emptiness, syntax, policy)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Per-identity request throttling
    #[error("Rate limit exceeded. Maximum {limit} requests per minute.")]
    RateLimited {
        /// The configured per-window request limit
        limit: u32,
    },

    /// Provider errors (visible only at service construction time)
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// HTTP status code the embedding routing layer maps this error to.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 400,
            ServiceError::RateLimited { .. } => 429,
            ServiceError::Provider(_) => 502,
            ServiceError::Config(_)
            | ServiceError::Serialization(_)
            | ServiceError::Internal(_) => 500,
        }
    }
}
