// Route handlers
//
// The transport layer owns status codes: the chat service returns a typed
// result and the `IntoResponse` impl below maps failures to 500 with the
// fixed user-facing reply. The underlying cause is logged, never exposed.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;

use super::AppState;
use crate::chat::ChatError;
use crate::config::ServerConfig;
use crate::store::Record;

/// Reply sent alongside a 500 when the completion call fails, regardless
/// of cause.
pub const CHAT_FALLBACK_REPLY: &str = "❌ Error: My server is busy or the AI key is missing.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct CreateAck {
    pub message: String,
}

/// Build the application router.
///
/// Static serving comes from `config`: the static dir (landing page) is
/// mounted as the fallback, the assets dir under `/assets`. Either may be
/// absent, which is how the integration tests run.
pub fn create_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/students", get(list_students).post(create_student))
        .route("/chat", post(handle_chat))
        .with_state(state);

    if let Some(assets_dir) = &config.assets_dir {
        app = app.nest_service("/assets", ServeDir::new(assets_dir));
    }

    if let Some(static_dir) = &config.static_dir {
        // ServeDir resolves "/" to index.html — the landing page.
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    app
}

/// GET /students — the full snapshot, verbatim
async fn list_students(State(state): State<Arc<AppState>>) -> Json<Vec<Record>> {
    Json(state.chat.list_all().await)
}

/// POST /chat — relay a message through the completion provider
async fn handle_chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError> {
    let reply = state.chat.handle(&request.message).await?;
    Ok(Json(ChatResponse { reply }))
}

/// POST /students — accepted, acknowledged, never persisted
///
/// The body is taken as raw bytes so any payload (including non-JSON)
/// still gets the acknowledgement.
async fn create_student(State(state): State<Arc<AppState>>, body: Bytes) -> Json<CreateAck> {
    let record = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    let message = state.chat.create(record).await;
    Json(CreateAck { message })
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatResponse {
                reply: CHAT_FALLBACK_REPLY.to_string(),
            }),
        )
            .into_response()
    }
}
