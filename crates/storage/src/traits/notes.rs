use async_trait::async_trait;
use chief_core::{ActionItem, ActionStatus, NoteSession};

use crate::error::StorageError;

/// Note session persistence.
#[async_trait]
pub trait NoteSessionStore: Send + Sync {
    /// Save or replace a session, entries included.
    async fn save_session(&self, session: &NoteSession) -> Result<(), StorageError>;

    async fn get_session(&self, id: &str) -> Result<Option<NoteSession>, StorageError>;

    /// Sessions owned by `user_id`, newest first.
    async fn list_sessions(&self, user_id: &str) -> Result<Vec<NoteSession>, StorageError>;
}

/// Action item persistence. Items are never deleted.
#[async_trait]
pub trait ActionItemStore: Send + Sync {
    async fn save_action(&self, user_id: &str, action: &ActionItem) -> Result<(), StorageError>;

    /// Save several items atomically.
    async fn save_actions(&self, user_id: &str, actions: &[ActionItem]) -> Result<(), StorageError>;

    async fn get_action(&self, user_id: &str, id: &str) -> Result<Option<ActionItem>, StorageError>;

    /// Secondary-index lookup by status, ordered by due date.
    async fn actions_by_status(
        &self,
        user_id: &str,
        status: ActionStatus,
    ) -> Result<Vec<ActionItem>, StorageError>;
}
