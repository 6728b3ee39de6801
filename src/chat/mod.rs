// Chat proxy service
//
// Loads a fresh record snapshot per request, wraps it in the system
// prompt, and relays the user's message to the completion provider.

use std::sync::Arc;

use thiserror::Error;

use crate::config::ChatConfig;
use crate::providers::{ChatMessage, CompletionProvider, CompletionRequest, ProviderError};
use crate::store::{Record, RecordStore};

pub mod prompt;

/// Reply substituted when the API succeeds but returns no text.
pub const NO_RESPONSE_REPLY: &str = "No response.";

/// Acknowledgement for create requests; the deployment's storage is
/// read-only, so new records are accepted but never persisted.
pub const CREATE_NOT_PERSISTED_NOTE: &str =
    "Note: new students are not saved permanently on this deployment.";

/// Failure categories at the service boundary. The transport layer maps
/// these to status codes; the service never picks a status itself.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The completion call failed (network, auth, quota, malformed body)
    #[error("chat completion failed: {0}")]
    Completion(#[from] ProviderError),
}

/// Chat proxy over an injected record store and completion provider.
pub struct ChatService {
    store: Arc<dyn RecordStore>,
    provider: Arc<dyn CompletionProvider>,
    model: String,
    temperature: f32,
}

impl ChatService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        provider: Arc<dyn CompletionProvider>,
        config: &ChatConfig,
    ) -> Self {
        Self {
            store,
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Relay a chat message to the completion provider with the current
    /// record snapshot embedded in the system prompt.
    ///
    /// The message is forwarded as-is — no length or content validation,
    /// empty strings included. A store read failure degrades to an empty
    /// snapshot; only a completion failure is an error.
    pub async fn handle(&self, message: &str) -> Result<String, ChatError> {
        let records = self.store.fetch_all().await;
        let snapshot = prompt::render_snapshot(&records);
        let system_prompt = prompt::build_system_prompt(&snapshot);

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(message),
            ],
            temperature: self.temperature,
        };

        let response = self.provider.complete(&request).await?;

        Ok(response
            .content
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| NO_RESPONSE_REPLY.to_string()))
    }

    /// Full current snapshot, verbatim — no filtering, no pagination.
    pub async fn list_all(&self) -> Vec<Record> {
        self.store.fetch_all().await
    }

    /// Accept a new record without persisting it.
    ///
    /// The store is never touched; every call reports the same caveated
    /// success. Documented limitation of the deployment, not a bug.
    pub async fn create(&self, _record: serde_json::Value) -> String {
        tracing::debug!("create request acknowledged but not persisted");
        CREATE_NOT_PERSISTED_NOTE.to_string()
    }
}
