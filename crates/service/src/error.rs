//! Typed error enum for the service layer.
//!
//! Unifies storage, model, embedding and collaborator failures so handlers
//! can map each failure mode to a response without downcasting.

use chief_core::CoreError;
use chief_embeddings::EmbeddingError;
use chief_llm::LlmError;
use chief_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The note session has already been closed.
    #[error("note session {0} is closed")]
    SessionClosed(String),

    /// Caller provided invalid input (empty text, malformed data).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Required collaborator (model, embeddings, calendar, SMS) is not configured.
    #[error("not configured: {0}")]
    NotConfigured(String),

    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    #[error("embedding: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("calendar: {0}")]
    Calendar(String),

    #[error("messaging: {0}")]
    Messaging(String),
}

impl ServiceError {
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound { entity, id: id.to_owned() }
    }

    /// Whether this error is likely transient (worth retrying).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::Llm(e) => e.is_transient(),
            _ => false,
        }
    }

    /// Whether this error represents a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Storage(StorageError::NotFound { .. }))
    }

    /// Whether the failure came from a remote collaborator rather than the caller.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Llm(_) | Self::Embedding(_) | Self::Calendar(_) | Self::Messaging(_)
        )
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Config(msg) => Self::NotConfigured(msg),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
