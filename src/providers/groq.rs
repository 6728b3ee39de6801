// Groq API provider implementation
//
// Groq serves an OpenAI-compatible chat completions endpoint, so the wire
// types below are the standard OpenAI request/response shapes.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::types::{ChatMessage, CompletionRequest, CompletionResponse};
use super::{CompletionProvider, ProviderError};

const GROQ_BASE_URL: &str = "https://api.groq.com";

/// Groq chat completions client
#[derive(Clone)]
pub struct GroqProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
}

impl GroqProvider {
    /// Create a new Groq provider.
    ///
    /// The client is deliberately built without a request timeout: a slow
    /// upstream stalls only the requesting call, and a single failed
    /// attempt surfaces immediately — there is no retry policy.
    pub fn new(api_key: String, default_model: String) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: GROQ_BASE_URL.to_string(),
            default_model,
        })
    }

    /// Point the provider at a different endpoint (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn to_wire_request(&self, request: &CompletionRequest) -> GroqRequest {
        let model = if request.model.is_empty() {
            self.default_model.clone()
        } else {
            request.model.clone()
        };

        GroqRequest {
            model,
            messages: request.messages.clone(),
            temperature: request.temperature,
        }
    }

    fn from_wire_response(&self, response: GroqResponse) -> CompletionResponse {
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        CompletionResponse {
            model: response.model,
            content,
        }
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        let wire_request = self.to_wire_request(request);
        let url = format!("{}/openai/v1/chat/completions", self.base_url);

        tracing::debug!("Sending request to Groq API: {:?}", wire_request);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&wire_request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let wire_response: GroqResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        tracing::debug!("Received response: {:?}", wire_response);

        Ok(self.from_wire_response(wire_response))
    }

    fn name(&self) -> &str {
        "groq"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }
}

// Groq wire types (OpenAI chat completions format)

#[derive(Debug, Clone, Serialize)]
struct GroqRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
struct GroqResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    choices: Vec<GroqChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct GroqChoice {
    message: GroqChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct GroqChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider(base_url: &str) -> GroqProvider {
        GroqProvider::new("test-key".to_string(), "test-model".to_string())
            .unwrap()
            .with_base_url(base_url)
    }

    fn test_request() -> CompletionRequest {
        CompletionRequest {
            model: String::new(),
            messages: vec![ChatMessage::system("rules"), ChatMessage::user("hi")],
            temperature: 0.5,
        }
    }

    #[test]
    fn test_provider_creation() {
        let provider = GroqProvider::new("key".to_string(), "m".to_string());
        assert!(provider.is_ok());
        assert_eq!(provider.unwrap().name(), "groq");
    }

    #[test]
    fn test_empty_model_falls_back_to_default() {
        let provider = test_provider("http://localhost");
        let wire = provider.to_wire_request(&test_request());
        assert_eq!(wire.model, "test-model");
    }

    #[tokio::test]
    async fn test_complete_extracts_first_choice() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/openai/v1/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "model": "test-model",
                    "choices": [
                        {"message": {"role": "assistant", "content": "first"}},
                        {"message": {"role": "assistant", "content": "second"}}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let provider = test_provider(&server.url());
        let response = provider.complete(&test_request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.content.as_deref(), Some("first"));
        assert_eq!(response.model, "test-model");
    }

    #[tokio::test]
    async fn test_complete_no_choices_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/openai/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"model": "test-model", "choices": []}"#)
            .create_async()
            .await;

        let provider = test_provider(&server.url());
        let response = provider.complete(&test_request()).await.unwrap();
        assert!(response.content.is_none());
    }

    #[tokio::test]
    async fn test_complete_non_success_status_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/openai/v1/chat/completions")
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let provider = test_provider(&server.url());
        let err = provider.complete(&test_request()).await.unwrap_err();
        match err {
            ProviderError::Api { status, body } => {
                assert_eq!(status.as_u16(), 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_undecodable_body_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/openai/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create_async()
            .await;

        let provider = test_provider(&server.url());
        let err = provider.complete(&test_request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }
}
