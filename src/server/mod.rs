// HTTP server module
// Routes, shared state, and the serve loop

mod handlers;

pub use handlers::{create_router, ChatRequest, ChatResponse, CreateAck, CHAT_FALLBACK_REPLY};

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::chat::ChatService;
use crate::config::ServerConfig;

/// Shared application state handed to every handler.
pub struct AppState {
    pub chat: ChatService,
}

/// Start the HTTP server and run until the process is stopped.
pub async fn serve(config: &ServerConfig, chat: ChatService) -> Result<()> {
    let addr: SocketAddr = config.bind_address.parse()?;

    let app_state = Arc::new(AppState { chat });

    // Body limit guards against oversized payloads; the chat body is a
    // single natural-language message, so 1MB is already generous.
    let app = create_router(app_state, config)
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting rosterbot server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
