use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use crate::gateway::{ChatCompletionRequest, GatewayError};
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/chat", post(chat))
}

async fn root() -> Json<Value> {
    Json(json!({ "status": "MediLink backend running" }))
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_agent_type")]
    pub agent_type: String,
    // Not strictly used but kept for compatibility
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_agent_type() -> String {
    "TRIAGE".to_string()
}

fn default_role() -> String {
    "user".to_string()
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Relay one chat message to the gateway under the selected system prompt.
///
/// Gateway failures are folded into the reply string under HTTP 200; the
/// only hard error is a missing API key.
async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, (StatusCode, Json<Value>)> {
    let Some(gateway) = state.gateway.as_ref() else {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "Backend API Key not configured" })),
        ));
    };

    debug!(agent_type = %req.agent_type, role = %req.role, "Handling chat request");

    let entry = state.prompts.lookup(&req.agent_type);
    let payload = ChatCompletionRequest::relay(
        entry.model,
        entry.system_prompt,
        &req.message,
        &req.agent_type,
    );

    let reply = match gateway.chat_completion(&payload).await {
        Ok(content) => content,
        Err(GatewayError::Upstream { status, body }) => {
            // Surfaced to the frontend inside a normal reply
            warn!("Keywords AI error ({}): {}", status, body);
            format!("Error: {}", body)
        }
        Err(err) => {
            error!("Server error: {}", err);
            "Internal server error".to_string()
        }
    };

    Ok(Json(ChatReply { reply }))
}
