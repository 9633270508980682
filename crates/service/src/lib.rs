//! Service layer for chief
//!
//! Business logic between the HTTP/CLI surfaces and the stores, model and
//! remote collaborators. [`Services::from_config`] wires everything from an
//! [`AppConfig`].

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod assistant;
mod briefing;
mod calendar;
mod contact_service;
mod credential_service;
mod document_service;
mod error;
mod ids;
mod messaging;
mod note_service;
pub mod seed;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use chief_core::AppConfig;
use chief_embeddings::{EmbeddingProvider, OpenAiEmbedder};
use chief_llm::{ChatModel, LlmClient};
use chief_storage::{QdrantIndex, Storage, VectorIndex};

pub use assistant::Assistant;
pub use briefing::{BriefingKind, build_briefing, render_briefing};
pub use calendar::{CalendarProvider, CalendarService, FreeSlot, GoogleCalendarClient, free_days};
pub use contact_service::ContactService;
pub use credential_service::{CredentialService, expiring_within};
pub use document_service::DocumentService;
pub use error::ServiceError;
pub use messaging::{MessageSender, TwilioClient};
pub use note_service::{NoteService, VoiceNoteResult};

/// Every service, sharing one store and one set of collaborators.
pub struct Services {
    pub notes: Arc<NoteService>,
    pub documents: Arc<DocumentService>,
    pub credentials: Arc<CredentialService>,
    pub contacts: Arc<ContactService>,
    pub calendar: Arc<CalendarService>,
    pub assistant: Arc<Assistant>,
    pub messenger: Option<Arc<dyn MessageSender>>,
    pub user_phone: Option<String>,
}

/// Collaborators that may be absent. Each one missing surfaces as
/// `ServiceError::NotConfigured` when an operation needs it.
#[derive(Default)]
pub struct Collaborators {
    pub model: Option<Arc<dyn ChatModel>>,
    pub embedder: Option<Arc<dyn EmbeddingProvider>>,
    pub vector_index: Option<Arc<dyn VectorIndex>>,
    pub calendar: Option<Arc<dyn CalendarProvider>>,
    pub messenger: Option<Arc<dyn MessageSender>>,
}

impl Services {
    /// Open the database and connect every configured collaborator.
    pub fn from_config(config: &AppConfig) -> Result<Self, ServiceError> {
        if let Some(parent) = config.db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ServiceError::InvalidInput(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        let storage = Arc::new(Storage::new(&config.db_path, config.pool_size)?);

        let model: Option<Arc<dyn ChatModel>> = match LlmClient::from_config(&config.llm) {
            Ok(client) => {
                tracing::info!(model = client.model(), "language model configured");
                Some(Arc::new(client))
            },
            Err(e) => {
                tracing::warn!(error = %e, "language model disabled");
                None
            },
        };

        let embedder: Option<Arc<dyn EmbeddingProvider>> =
            match OpenAiEmbedder::from_config(&config.embedding) {
                Ok(embedder) => Some(Arc::new(embedder)),
                Err(e) => {
                    tracing::warn!(error = %e, "embeddings disabled");
                    None
                },
            };

        let vector_index: Option<Arc<dyn VectorIndex>> = match &config.qdrant {
            Some(qdrant) => {
                tracing::info!(url = %qdrant.url, collection = %qdrant.collection, "using Qdrant vector index");
                Some(Arc::new(QdrantIndex::new(qdrant)?))
            },
            None => None,
        };

        let calendar: Option<Arc<dyn CalendarProvider>> = match &config.calendar {
            Some(cal) => Some(Arc::new(GoogleCalendarClient::from_config(cal)?)),
            None => None,
        };

        let messenger: Option<Arc<dyn MessageSender>> = match &config.twilio {
            Some(twilio) => Some(Arc::new(TwilioClient::from_config(twilio)?)),
            None => None,
        };

        Ok(Self::with_storage(
            config,
            storage,
            Collaborators { model, embedder, vector_index, calendar, messenger },
        ))
    }

    /// Wire services over an open store. Without a remote vector index the
    /// store's own vector table is used.
    #[must_use]
    pub fn with_storage(config: &AppConfig, storage: Arc<Storage>, collaborators: Collaborators) -> Self {
        let Collaborators { model, embedder, vector_index, calendar, messenger } = collaborators;
        let vector_index: Arc<dyn VectorIndex> = match vector_index {
            Some(index) => index,
            None => storage.clone(),
        };

        let notes = Arc::new(NoteService::new(
            storage.clone(),
            storage.clone(),
            model.clone(),
            config.user_id.clone(),
        ));
        let documents = Arc::new(DocumentService::new(
            storage.clone(),
            vector_index,
            embedder,
            model.clone(),
            config.chunking,
        ));
        let credentials =
            Arc::new(CredentialService::new(storage.clone(), config.user_id.clone(), config.timezone));
        let contacts = Arc::new(ContactService::new(storage, config.user_id.clone()));
        let calendar = Arc::new(CalendarService::new(calendar, config.timezone));
        let assistant =
            Arc::new(Assistant::new(notes.clone(), calendar.clone(), model, config.timezone));

        Self {
            notes,
            documents,
            credentials,
            contacts,
            calendar,
            assistant,
            messenger,
            user_phone: config.user_phone.clone(),
        }
    }
}
