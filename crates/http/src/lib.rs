//! HTTP API server for chief.

#![allow(clippy::missing_errors_doc, reason = "Handlers return ApiError")]

pub mod api_error;
mod api_types;
mod handlers;
#[cfg(test)]
mod tests;

use std::num::NonZeroUsize;
use std::sync::Arc;

use axum::Json;
use axum::routing::{get, post};
use axum::Router;
use chief_core::ConversationContext;
use chief_service::Services;
use lru::LruCache;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

pub use api_types::VersionResponse;

/// Conversations kept in memory before the least recently used is dropped.
pub const MAX_CONVERSATIONS: NonZeroUsize = match NonZeroUsize::new(256) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub services: Services,
    /// Conversation contexts by conversation id, kept in memory only.
    conversations: Mutex<LruCache<String, Arc<Mutex<ConversationContext>>>>,
}

impl AppState {
    #[must_use]
    pub fn new(services: Services) -> Self {
        Self::with_capacity(services, MAX_CONVERSATIONS)
    }

    #[must_use]
    pub fn with_capacity(services: Services, capacity: NonZeroUsize) -> Self {
        Self { services, conversations: Mutex::new(LruCache::new(capacity)) }
    }

    /// The context for `id`, created on first use. Callers hold its lock for
    /// the whole request so turns within one conversation are serialized.
    /// An evicted conversation starts over with empty history.
    pub(crate) async fn conversation(&self, id: &str) -> Arc<Mutex<ConversationContext>> {
        let mut conversations = self.conversations.lock().await;
        conversations.get_or_insert(id.to_owned(), Default::default).clone()
    }

    #[cfg(test)]
    pub(crate) async fn conversation_count(&self) -> usize {
        self.conversations.lock().await.len()
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    use handlers::{calendar, chat, contacts, credentials, documents, notes, webhooks};

    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/chat", post(chat::chat))
        .route("/webhook/sms", post(webhooks::sms))
        .route("/webhook/briefing", post(webhooks::briefing))
        .route("/api/notes/sessions", post(notes::start_session).get(notes::list_sessions))
        .route("/api/notes/sessions/{id}", get(notes::get_session))
        .route("/api/notes/sessions/{id}/entries", post(notes::add_entry))
        .route("/api/notes/sessions/{id}/end", post(notes::end_session))
        .route("/api/actions", post(notes::add_action))
        .route("/api/actions/pending", get(notes::pending_actions))
        .route("/api/actions/{id}/complete", post(notes::complete_action))
        .route(
            "/api/credentials",
            get(credentials::list_credentials).post(credentials::add_credential),
        )
        .route("/api/credentials/expiring", get(credentials::expiring))
        .route("/api/credentials/ceu", get(credentials::ceu_status))
        .route("/api/credentials/report", get(credentials::report))
        .route("/api/credentials/{name}", get(credentials::get_credential))
        .route("/api/credentials/{name}/ceu", post(credentials::update_ceu))
        .route("/api/credentials/{name}/milestones", post(credentials::add_milestone))
        .route("/api/contacts", get(contacts::list_contacts).post(contacts::add_contact))
        .route("/api/contacts/{name}", get(contacts::get_contact))
        .route("/api/contacts/{name}/interactions", post(contacts::log_interaction))
        .route("/api/contacts/{name}/tone", get(contacts::tone))
        .route("/api/contacts/{name}/draft", post(contacts::draft))
        .route(
            "/api/documents",
            get(documents::list_documents).post(documents::add_document),
        )
        .route("/api/documents/search", get(documents::search))
        .route("/api/documents/query", post(documents::query))
        .route(
            "/api/documents/{id}",
            get(documents::get_document).delete(documents::delete_document),
        )
        .route("/api/documents/{id}/reindex", post(documents::reindex))
        .route("/api/calendar/today", get(calendar::today))
        .route("/api/calendar/upcoming", get(calendar::upcoming))
        .route("/api/calendar/events", post(calendar::create_event))
        .route("/api/calendar/free", get(calendar::free_days))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
