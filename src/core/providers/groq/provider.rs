//! Groq chat-completion client
//!
//! Posts to Groq's OpenAI-compatible `/chat/completions` endpoint. Every
//! call is bounded by the configured timeout and authenticated with a key
//! picked uniformly at random from the configured pool.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::debug;

use super::config::GroqConfig;
use crate::core::providers::{ChatProvider, ProviderError};
use crate::core::types::{ChatRequest, ChatResponse};

/// Groq provider implementation
#[derive(Debug, Clone)]
pub struct GroqProvider {
    config: GroqConfig,
    client: reqwest::Client,
}

impl GroqProvider {
    /// Create a new Groq provider instance.
    pub fn new(config: GroqConfig) -> Result<Self, ProviderError> {
        config.validate().map_err(ProviderError::Configuration)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| {
                ProviderError::Configuration(format!("failed to build HTTP client: {}", err))
            })?;

        Ok(Self { config, client })
    }

    /// Pick one key uniformly at random from the configured pool.
    fn select_api_key(&self) -> Result<&str, ProviderError> {
        self.config
            .api_keys
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .ok_or_else(|| ProviderError::Configuration("no Groq API keys available".to_string()))
    }
}

#[async_trait]
impl ChatProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        debug!("Groq chat request: model={}", request.model);

        let api_key = self.select_api_key()?;
        let url = format!("{}/chat/completions", self.config.get_api_base());

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    ProviderError::Timeout(self.config.timeout_secs)
                } else {
                    ProviderError::Network(err.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_http_status(status.as_u16(), &body));
        }

        response.json::<ChatResponse>().await.map_err(|err| {
            ProviderError::Api {
                status: status.as_u16(),
                message: format!("failed to parse chat response: {}", err),
            }
        })
    }
}
