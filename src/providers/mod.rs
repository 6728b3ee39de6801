// Completion API abstraction
//
// The chat service talks to the external LLM through this trait so the
// concrete provider can be swapped for a test double.

use async_trait::async_trait;
use thiserror::Error;

mod types;

pub mod groq;

pub use groq::GroqProvider;
pub use types::{ChatMessage, CompletionRequest, CompletionResponse};

/// Errors from the completion API call, categorized so the transport
/// layer can decide on status codes without parsing strings.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never completed (connect, DNS, TLS, mid-body failure)
    #[error("failed to reach completion API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status (auth, quota, bad request)
    #[error("completion API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The API answered 2xx but the body was not decodable
    #[error("could not parse completion API response: {0}")]
    Malformed(String),
}

/// Trait for chat-completion providers
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a chat completion request and wait for the full response.
    ///
    /// A response with no choices is not an error; it comes back as a
    /// `CompletionResponse` with no content.
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, ProviderError>;

    /// Provider name (e.g., "groq")
    fn name(&self) -> &str;

    /// Default model for this provider
    fn default_model(&self) -> &str;
}
