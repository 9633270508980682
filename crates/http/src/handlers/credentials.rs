use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use chief_core::{CeuProgress, CeuUpdate, Credential, ExpiringCredential};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{CeuRequest, CredentialRequest, ExpiringQuery, MilestoneRequest, ReportResponse};

pub async fn list_credentials(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Credential>>, ApiError> {
    Ok(Json(state.services.credentials.list_credentials().await?))
}

pub async fn add_credential(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialRequest>,
) -> Result<Json<Credential>, ApiError> {
    Ok(Json(state.services.credentials.add_credential(req.into()).await?))
}

pub async fn get_credential(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Credential>, ApiError> {
    Ok(Json(state.services.credentials.get_credential(&name).await?))
}

pub async fn update_ceu(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<CeuRequest>,
) -> Result<Json<CeuUpdate>, ApiError> {
    Ok(Json(state.services.credentials.update_ceu(&name, req.hours).await?))
}

pub async fn add_milestone(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<MilestoneRequest>,
) -> Result<Json<Credential>, ApiError> {
    let credential =
        state.services.credentials.add_milestone(&name, &req.description, req.date).await?;
    Ok(Json(credential))
}

pub async fn expiring(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExpiringQuery>,
) -> Result<Json<Vec<ExpiringCredential>>, ApiError> {
    Ok(Json(state.services.credentials.get_expiring_soon(query.days).await?))
}

pub async fn ceu_status(State(state): State<Arc<AppState>>) -> Result<Json<Vec<CeuProgress>>, ApiError> {
    Ok(Json(state.services.credentials.ceu_status().await?))
}

pub async fn report(State(state): State<Arc<AppState>>) -> Result<Json<ReportResponse>, ApiError> {
    let report = state.services.credentials.status_report().await?;
    Ok(Json(ReportResponse { report }))
}
