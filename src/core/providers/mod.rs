//! Upstream model providers
//!
//! The orchestrator talks to the model through the [`ChatProvider`] seam so
//! tests can substitute a scripted backend for the real Groq client.

pub mod error;
pub mod groq;

pub use error::ProviderError;
pub use groq::{GroqConfig, GroqProvider};

use async_trait::async_trait;

use crate::core::types::{ChatRequest, ChatResponse};

/// A chat-completion backend
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &'static str;

    /// Execute a chat completion against the provider.
    async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError>;
}
