// Student record storage
//
// Records are open-ended JSON objects; whatever fields the backing file
// contains are served as-is. The store is read-only from the serving path.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// A single student record. No schema is enforced.
pub type Record = Map<String, Value>;

/// Capability: fetch the current record collection.
///
/// Implementations are fail-soft by contract: a missing, unreadable, or
/// malformed backing store yields an empty snapshot rather than an error,
/// so the chat and listing paths keep answering regardless.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the full current record collection.
    ///
    /// Called fresh on every request; nothing is cached between calls.
    async fn fetch_all(&self) -> Vec<Record>;
}

/// Record store backed by a single JSON file holding an array of objects.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn fetch_all(&self) -> Vec<Record> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(
                    "Could not read {}: {e}; serving empty snapshot",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Record>>(&contents) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    "Malformed records in {}: {e}; serving empty snapshot",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }
}
