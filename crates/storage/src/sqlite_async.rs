//! Async trait implementations for `SQLite` `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use chief_core::{
    ActionItem, ActionStatus, ChunkPoint, Contact, Credential, Document, NoteSession, ScoredChunk,
};

use crate::Storage;
use crate::error::StorageError;
use crate::traits::{
    ActionItemStore, ContactStore, CredentialStore, DocumentStore, NoteSessionStore, VectorIndex,
};

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Join(e.to_string()))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`: `.clone()` a `&T`, pass as `&arg`
/// - `@str arg`: `.to_owned()` a `&str`, pass as `&arg`
/// - `@opt_str arg`: `.map(ToOwned::to_owned)` an `Option<&str>`, pass as `arg.as_deref()`
/// - `@slice arg`  : `.to_vec()` a `&[T]`, pass as `&arg`
/// - `@val arg`: move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture opt_str $arg:ident) => { let $arg = $arg.map(ToOwned::to_owned); };
    (@capture slice $arg:ident) => { let $arg = $arg.to_vec(); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass str $arg:ident) => { &$arg };
    (@pass opt_str $arg:ident) => { $arg.as_deref() };
    (@pass slice $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

// ── NoteSessionStore ─────────────────────────────────────────────

#[async_trait]
impl NoteSessionStore for Storage {
    async fn save_session(&self, session: &NoteSession) -> Result<(), StorageError> {
        delegate!(self, save_session, @ref session)
    }
    async fn get_session(&self, id: &str) -> Result<Option<NoteSession>, StorageError> {
        delegate!(self, get_session, @str id)
    }
    async fn list_sessions(&self, user_id: &str) -> Result<Vec<NoteSession>, StorageError> {
        delegate!(self, list_sessions, @str user_id)
    }
}

// ── ActionItemStore ──────────────────────────────────────────────

#[async_trait]
impl ActionItemStore for Storage {
    async fn save_action(&self, user_id: &str, action: &ActionItem) -> Result<(), StorageError> {
        delegate!(self, save_action, @str user_id, @ref action)
    }
    async fn save_actions(&self, user_id: &str, actions: &[ActionItem]) -> Result<(), StorageError> {
        delegate!(self, save_actions, @str user_id, @slice actions)
    }
    async fn get_action(&self, user_id: &str, id: &str) -> Result<Option<ActionItem>, StorageError> {
        delegate!(self, get_action, @str user_id, @str id)
    }
    async fn actions_by_status(
        &self,
        user_id: &str,
        status: ActionStatus,
    ) -> Result<Vec<ActionItem>, StorageError> {
        delegate!(self, actions_by_status, @str user_id, @val status)
    }
}

// ── CredentialStore ──────────────────────────────────────────────

#[async_trait]
impl CredentialStore for Storage {
    async fn save_credential(&self, user_id: &str, credential: &Credential) -> Result<(), StorageError> {
        delegate!(self, save_credential, @str user_id, @ref credential)
    }
    async fn get_credential(&self, user_id: &str, name: &str) -> Result<Option<Credential>, StorageError> {
        delegate!(self, get_credential, @str user_id, @str name)
    }
    async fn list_credentials(&self, user_id: &str) -> Result<Vec<Credential>, StorageError> {
        delegate!(self, list_credentials, @str user_id)
    }
}

// ── ContactStore ─────────────────────────────────────────────────

#[async_trait]
impl ContactStore for Storage {
    async fn save_contact(&self, user_id: &str, contact: &Contact) -> Result<(), StorageError> {
        delegate!(self, save_contact, @str user_id, @ref contact)
    }
    async fn get_contact(&self, user_id: &str, name: &str) -> Result<Option<Contact>, StorageError> {
        delegate!(self, get_contact, @str user_id, @str name)
    }
    async fn list_contacts(&self, user_id: &str) -> Result<Vec<Contact>, StorageError> {
        delegate!(self, list_contacts, @str user_id)
    }
}

// ── DocumentStore ────────────────────────────────────────────────

#[async_trait]
impl DocumentStore for Storage {
    async fn save_document(&self, document: &Document) -> Result<(), StorageError> {
        delegate!(self, save_document, @ref document)
    }
    async fn get_document(&self, id: &str) -> Result<Option<Document>, StorageError> {
        delegate!(self, get_document, @str id)
    }
    async fn list_documents(&self, doc_type: Option<&str>) -> Result<Vec<Document>, StorageError> {
        delegate!(self, list_documents, @opt_str doc_type)
    }
    async fn delete_document(&self, id: &str) -> Result<bool, StorageError> {
        delegate!(self, delete_document, @str id)
    }
}

// ── VectorIndex (sqlite-vec) ─────────────────────────────────────

#[async_trait]
impl VectorIndex for Storage {
    async fn ensure_collection(&self, _dimension: usize) -> Result<(), StorageError> {
        // chunk_vectors is created by migrations
        Ok(())
    }
    async fn upsert(&self, points: &[ChunkPoint]) -> Result<(), StorageError> {
        delegate!(self, upsert_points, @slice points)
    }
    async fn search(
        &self,
        vector: &[f32],
        doc_type: Option<&str>,
        limit: usize,
    ) -> Result<Vec<ScoredChunk>, StorageError> {
        delegate!(self, search_points, @slice vector, @opt_str doc_type, @val limit)
    }
    async fn delete_document(&self, doc_id: &str) -> Result<(), StorageError> {
        let removed = delegate!(self, delete_points, @str doc_id)?;
        tracing::debug!(doc_id, removed, "removed chunk vectors");
        Ok(())
    }
}
