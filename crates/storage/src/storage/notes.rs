use chief_core::NoteSession;

use super::Storage;
use super::items::ItemRow;
use crate::error::StorageError;
use crate::keys::{META, SESSION_PREFIX, session_pk};

impl Storage {
    /// Save or replace a note session, entries included.
    pub fn save_session(&self, session: &NoteSession) -> Result<(), StorageError> {
        let pk = session_pk(&session.id);
        self.put_item(&ItemRow::new(&pk, META), session)
    }

    pub fn get_session(&self, id: &str) -> Result<Option<NoteSession>, StorageError> {
        self.get_item(&session_pk(id), META)
    }

    /// Sessions owned by `user_id`, newest first.
    pub fn list_sessions(&self, user_id: &str) -> Result<Vec<NoteSession>, StorageError> {
        let mut sessions: Vec<NoteSession> = self
            .scan_prefix::<NoteSession>(SESSION_PREFIX, META)?
            .into_iter()
            .filter(|s| s.user_id == user_id)
            .collect();
        sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(sessions)
    }
}
