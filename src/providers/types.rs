// Provider-agnostic request/response types

use serde::{Deserialize, Serialize};

/// A single message in a chat exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request to a completion provider
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier; empty string means the provider's default
    pub model: String,
    /// Messages in exchange order (system prompt first)
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f32,
}

/// Response from a completion provider
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Model that produced the response
    pub model: String,
    /// Text content of the first choice; `None` when the API returned no
    /// choices or a choice without content
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let system = ChatMessage::system("rules");
        assert_eq!(system.role, "system");
        assert_eq!(system.content, "rules");

        let user = ChatMessage::user("hi");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "hi");
    }
}
