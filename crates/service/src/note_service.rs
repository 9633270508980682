use std::sync::Arc;

use chief_core::{
    ActionItem, ActionStatus, EntryOutcome, ExtractedAction, Extraction, InputType, NoteEntry,
    NoteSession, Priority, SUMMARY_UNAVAILABLE, Workspace,
};
use chief_llm::{ChatModel, extract_action_items, summarize_notes};
use chief_storage::{ActionItemStore, NoteSessionStore};
use chrono::Utc;
use serde::Serialize;

use crate::error::ServiceError;
use crate::ids::short_id;

const VOICE_NOTE_TITLE: &str = "Voice Note";

/// Result of the one-shot voice note flow.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceNoteResult {
    pub session_id: String,
    pub transcript: String,
    pub actions: Vec<ActionItem>,
    pub summary: String,
}

/// Note sessions and the action items extracted from them.
pub struct NoteService {
    sessions: Arc<dyn NoteSessionStore>,
    actions: Arc<dyn ActionItemStore>,
    model: Option<Arc<dyn ChatModel>>,
    user_id: String,
}

impl NoteService {
    #[must_use]
    pub fn new(
        sessions: Arc<dyn NoteSessionStore>,
        actions: Arc<dyn ActionItemStore>,
        model: Option<Arc<dyn ChatModel>>,
        user_id: String,
    ) -> Self {
        Self { sessions, actions, model, user_id }
    }

    pub async fn start_session(
        &self,
        title: &str,
        workspace: Workspace,
    ) -> Result<NoteSession, ServiceError> {
        let title = title.trim();
        let title = if title.is_empty() { "Notes" } else { title };
        let session = NoteSession::new(short_id(), self.user_id.clone(), title.to_owned(), workspace);
        self.sessions.save_session(&session).await?;
        tracing::info!(session_id = %session.id, %workspace, "note session started");
        Ok(session)
    }

    /// Append an entry to an active session and extract its action items.
    ///
    /// Nothing is persisted unless the session exists and is active. Entries
    /// are read-modify-written, so two concurrent appends to one session can
    /// lose one of them.
    pub async fn add_entry(
        &self,
        session_id: &str,
        content: &str,
        input_type: InputType,
    ) -> Result<EntryOutcome, ServiceError> {
        let mut session = self
            .sessions
            .get_session(session_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("note session", session_id))?;
        if !session.is_active() {
            return Err(ServiceError::SessionClosed(session_id.to_owned()));
        }
        if content.trim().is_empty() {
            return Err(ServiceError::InvalidInput("note content is empty".to_owned()));
        }

        let entry = NoteEntry { timestamp: Utc::now(), content: content.to_owned(), input_type };
        let extraction = self.extract(content, session.workspace).await;

        session.entries.push(entry.clone());
        self.sessions.save_session(&session).await?;

        let actions: Vec<ActionItem> = extraction
            .actions()
            .iter()
            .cloned()
            .map(|a| {
                ActionItem::from_extracted(short_id(), a, session.workspace, Some(session.id.clone()))
            })
            .collect();
        self.actions.save_actions(&self.user_id, &actions).await?;

        tracing::info!(
            session_id,
            entries = session.entries.len(),
            actions = actions.len(),
            extraction_failed = extraction.is_failed(),
            "note entry added"
        );
        Ok(EntryOutcome { entry, extraction, actions })
    }

    /// Close a session with a model-written summary.
    ///
    /// The summarizer is called even for a session without entries. If it
    /// fails the session still closes, with a placeholder summary.
    pub async fn end_session(&self, session_id: &str) -> Result<NoteSession, ServiceError> {
        let mut session = self
            .sessions
            .get_session(session_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("note session", session_id))?;
        if !session.is_active() {
            return Err(ServiceError::SessionClosed(session_id.to_owned()));
        }

        let summary = self.summarize(&session.transcript(), session_id).await;
        session.close(summary);
        self.sessions.save_session(&session).await?;
        tracing::info!(session_id, entries = session.entries.len(), "note session closed");
        Ok(session)
    }

    pub async fn get_session(&self, session_id: &str) -> Result<NoteSession, ServiceError> {
        self.sessions
            .get_session(session_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("note session", session_id))
    }

    pub async fn list_sessions(&self) -> Result<Vec<NoteSession>, ServiceError> {
        Ok(self.sessions.list_sessions(&self.user_id).await?)
    }

    pub async fn get_pending_actions(&self) -> Result<Vec<ActionItem>, ServiceError> {
        Ok(self.actions.actions_by_status(&self.user_id, ActionStatus::Pending).await?)
    }

    /// Mark an action done. Completing a done action is a no-op.
    pub async fn complete_action(&self, action_id: &str) -> Result<ActionItem, ServiceError> {
        let mut action = self
            .actions
            .get_action(&self.user_id, action_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("action item", action_id))?;
        if action.status != ActionStatus::Done {
            action.status = ActionStatus::Done;
            self.actions.save_action(&self.user_id, &action).await?;
            tracing::info!(action_id, "action item completed");
        }
        Ok(action)
    }

    /// Add an action by hand, outside any note session.
    pub async fn add_action(
        &self,
        description: &str,
        workspace: Workspace,
        priority: Priority,
        due_date: Option<String>,
    ) -> Result<ActionItem, ServiceError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ServiceError::InvalidInput("action description is empty".to_owned()));
        }
        let action = ActionItem::from_extracted(
            short_id(),
            ExtractedAction { description: description.to_owned(), assignee: None, due_date, priority },
            workspace,
            None,
        );
        self.actions.save_action(&self.user_id, &action).await?;
        Ok(action)
    }

    /// Record a transcribed voice memo as a complete single-entry session.
    pub async fn capture_voice_note(
        &self,
        transcript: &str,
        workspace: Workspace,
    ) -> Result<VoiceNoteResult, ServiceError> {
        let session = self.start_session(VOICE_NOTE_TITLE, workspace).await?;
        let outcome = self.add_entry(&session.id, transcript, InputType::Voice).await?;
        let closed = self.end_session(&session.id).await?;
        Ok(VoiceNoteResult {
            session_id: closed.id,
            transcript: transcript.to_owned(),
            actions: outcome.actions,
            summary: closed.summary.unwrap_or_else(|| SUMMARY_UNAVAILABLE.to_owned()),
        })
    }

    async fn extract(&self, content: &str, workspace: Workspace) -> Extraction {
        match &self.model {
            Some(model) => extract_action_items(model.as_ref(), content, workspace).await,
            None => Extraction::Failed { reason: "language model is not configured".to_owned() },
        }
    }

    async fn summarize(&self, transcript: &str, session_id: &str) -> String {
        let Some(model) = &self.model else {
            tracing::warn!(session_id, "no language model configured, summary unavailable");
            return SUMMARY_UNAVAILABLE.to_owned();
        };
        match summarize_notes(model.as_ref(), transcript).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(session_id, error = %e, "note summary failed");
                SUMMARY_UNAVAILABLE.to_owned()
            },
        }
    }
}
