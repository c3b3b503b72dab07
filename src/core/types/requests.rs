//! Request types
//!
//! The inbound analysis payload and the outbound chat-completion wire format
//! (OpenAI-compatible, as spoken by Groq).

use serde::{Deserialize, Serialize};

/// Inbound analysis request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Python code to analyze
    pub code: String,
}

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction
    System,
    /// End-user content
    User,
    /// Model output
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role
    pub role: MessageRole,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Outbound chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,

    /// Conversation messages
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature (0.0 - 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum completion tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_helpers() {
        let msg = ChatMessage::system("be terse");
        assert_eq!(msg.role, MessageRole::System);
        assert_eq!(msg.content, "be terse");

        let msg = ChatMessage::user("hello");
        assert_eq!(msg.role, MessageRole::User);
    }

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: "llama3-8b-8192".to_string(),
            messages: vec![ChatMessage::user("hi")],
            temperature: Some(0.1),
            max_tokens: Some(2000),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3-8b-8192");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 2000);
    }

    #[test]
    fn test_chat_request_omits_unset_params() {
        let request = ChatRequest {
            model: "llama3-8b-8192".to_string(),
            messages: vec![],
            temperature: None,
            max_tokens: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
    }
}
