use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{ChatRequest, ChatResponse};

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let conversation_id = req
        .conversation_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let context = state.conversation(&conversation_id).await;
    let mut ctx = context.lock().await;
    let reply = state.services.assistant.handle(&mut ctx, &req.message).await?;

    Ok(Json(ChatResponse { conversation_id, reply }))
}
