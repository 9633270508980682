use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use chief_core::{Answer, Citation, Document, IndexReport};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{
    AddDocumentRequest, DeletedResponse, DocTypeQuery, DocumentSearchQuery, QuestionRequest,
    ReindexRequest,
};

pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DocTypeQuery>,
) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(state.services.documents.list_documents(query.doc_type.as_deref()).await?))
}

pub async fn add_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddDocumentRequest>,
) -> Result<Json<IndexReport>, ApiError> {
    let report = state
        .services
        .documents
        .add_document(&req.title, &req.content, &req.doc_type, req.source_file)
        .await?;
    Ok(Json(report))
}

pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    Ok(Json(state.services.documents.get_document(&id).await?))
}

pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.services.documents.delete_document(&id).await?;
    Ok(Json(DeletedResponse { deleted: true, id }))
}

pub async fn reindex(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ReindexRequest>,
) -> Result<Json<IndexReport>, ApiError> {
    Ok(Json(state.services.documents.reindex_document(&id, &req.content).await?))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DocumentSearchQuery>,
) -> Result<Json<Vec<Citation>>, ApiError> {
    let citations = state
        .services
        .documents
        .search(&query.q, query.doc_type.as_deref(), query.top_k)
        .await?;
    Ok(Json(citations))
}

pub async fn query(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuestionRequest>,
) -> Result<Json<Answer>, ApiError> {
    let answer =
        state.services.documents.query_with_answer(&req.question, req.doc_type.as_deref()).await?;
    Ok(Json(answer))
}
