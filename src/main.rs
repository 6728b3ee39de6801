// Rosterbot - Student records API with an AI chat assistant
// Main entry point

use anyhow::Result;
use std::sync::Arc;

use rosterbot::chat::ChatService;
use rosterbot::config::load_config;
use rosterbot::providers::GroqProvider;
use rosterbot::server;
use rosterbot::store::JsonFileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; a missing file is not an error
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rosterbot=info,tower_http=info".into()),
        )
        .init();

    // Load configuration
    let config = load_config()?;

    // Create completion provider and record store
    let provider = GroqProvider::new(config.api_key.clone(), config.chat.model.clone())?;
    let store = JsonFileStore::new(config.data_file.clone());

    tracing::info!(
        "Serving records from {} via model {}",
        config.data_file.display(),
        config.chat.model
    );

    // Create chat service and run the server
    let chat = ChatService::new(Arc::new(store), Arc::new(provider), &config.chat);

    server::serve(&config.server, chat).await
}
