use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use chief_core::{Contact, DraftContext, ToneGuidelines};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{ContactQuery, ContactRequest, DraftRequest, InteractionRequest};

/// All contacts, or those matching `?q=` by name, organization or role.
pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ContactQuery>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = match query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => state.services.contacts.search_contacts(q).await?,
        None => state.services.contacts.list_contacts().await?,
    };
    Ok(Json(contacts))
}

pub async fn add_contact(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<Contact>, ApiError> {
    Ok(Json(state.services.contacts.add_contact(req.into()).await?))
}

pub async fn get_contact(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    Ok(Json(state.services.contacts.get_contact(&name).await?))
}

pub async fn log_interaction(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<InteractionRequest>,
) -> Result<Json<Contact>, ApiError> {
    let contact = state
        .services
        .contacts
        .log_interaction(&name, &req.interaction_type, &req.summary, req.sentiment)
        .await?;
    Ok(Json(contact))
}

pub async fn tone(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ToneGuidelines>, ApiError> {
    Ok(Json(state.services.contacts.tone_guidelines(&name).await?))
}

pub async fn draft(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<DraftRequest>,
) -> Result<Json<DraftContext>, ApiError> {
    let context = state.services.contacts.draft_context(&name, &req.topic, &req.message_type).await?;
    Ok(Json(context))
}
