use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::routes::error_status;
use crate::api::state::AppState;
use crate::application::ChatOutcome;
use crate::domain::Quiz;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub model: String,
    #[serde(default = "default_use_retrieval")]
    pub use_retrieval: bool,
}

fn default_use_retrieval() -> bool {
    true
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply { reply: String },
    Quiz { quiz: Quiz },
}

pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    let outcome = state
        .chat_service
        .converse(&request.message, &request.model, request.use_retrieval)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "chat turn failed");
            error_status(&e)
        })?;

    Ok(Json(match outcome {
        ChatOutcome::Reply(reply) => ChatResponse::Reply { reply },
        ChatOutcome::Quiz(quiz) => ChatResponse::Quiz { quiz },
    }))
}
