use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use chief_core::{ActionItem, EntryOutcome, NoteSession, classify_workspace};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{AddActionRequest, AddEntryRequest, StartSessionRequest};

pub async fn start_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StartSessionRequest>,
) -> Result<Json<NoteSession>, ApiError> {
    let workspace = req.workspace.unwrap_or_else(|| classify_workspace(&req.title));
    let session = state.services.notes.start_session(&req.title, workspace).await?;
    Ok(Json(session))
}

pub async fn list_sessions(State(state): State<Arc<AppState>>) -> Result<Json<Vec<NoteSession>>, ApiError> {
    Ok(Json(state.services.notes.list_sessions().await?))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<NoteSession>, ApiError> {
    Ok(Json(state.services.notes.get_session(&id).await?))
}

pub async fn add_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<AddEntryRequest>,
) -> Result<Json<EntryOutcome>, ApiError> {
    let outcome = state.services.notes.add_entry(&id, &req.content, req.input_type).await?;
    Ok(Json(outcome))
}

pub async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<NoteSession>, ApiError> {
    Ok(Json(state.services.notes.end_session(&id).await?))
}

pub async fn pending_actions(State(state): State<Arc<AppState>>) -> Result<Json<Vec<ActionItem>>, ApiError> {
    Ok(Json(state.services.notes.get_pending_actions().await?))
}

pub async fn add_action(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddActionRequest>,
) -> Result<Json<ActionItem>, ApiError> {
    let workspace = req.workspace.unwrap_or_else(|| classify_workspace(&req.description));
    let action = state
        .services
        .notes
        .add_action(&req.description, workspace, req.priority, req.due_date)
        .await?;
    Ok(Json(action))
}

pub async fn complete_action(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ActionItem>, ApiError> {
    Ok(Json(state.services.notes.complete_action(&id).await?))
}
