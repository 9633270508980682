//! Routes one inbound message to the handler for its intent.

use std::sync::Arc;

use chief_core::{
    ActionItem, ConversationContext, InputType, Intent, Reply, Role, Workspace, classify_intent,
    classify_workspace, format_events_for_display,
};
use chief_llm::{ChatModel, converse, render_system_prompt};
use chrono::{FixedOffset, Utc};

use crate::briefing::{BriefingKind, build_briefing};
use crate::calendar::CalendarService;
use crate::error::ServiceError;
use crate::note_service::NoteService;

const DEFAULT_NOTE_TITLE: &str = "Notes";
const UPCOMING_DAYS: u32 = 7;

/// Phrases that introduce a note session title, longest first.
const NOTE_TRIGGERS: [&str; 4] = ["taking notes", "notes", "note", "begin"];

pub struct Assistant {
    notes: Arc<NoteService>,
    calendar: Arc<CalendarService>,
    model: Option<Arc<dyn ChatModel>>,
    timezone: FixedOffset,
}

impl Assistant {
    #[must_use]
    pub fn new(
        notes: Arc<NoteService>,
        calendar: Arc<CalendarService>,
        model: Option<Arc<dyn ChatModel>>,
        timezone: FixedOffset,
    ) -> Self {
        Self { notes, calendar, model, timezone }
    }

    /// Handle a typed chat message.
    pub async fn handle(&self, ctx: &mut ConversationContext, text: &str) -> Result<Reply, ServiceError> {
        self.handle_input(ctx, text, InputType::Text).await
    }

    /// Handle a message arriving over `input_type`. Note entries record the channel.
    pub async fn handle_input(
        &self,
        ctx: &mut ConversationContext,
        text: &str,
        input_type: InputType,
    ) -> Result<Reply, ServiceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ServiceError::InvalidInput("message is empty".to_owned()));
        }

        let workspace = classify_workspace(text);
        let intent = classify_intent(text);
        ctx.workspace = workspace;
        ctx.push(Role::User, text);
        tracing::info!(%workspace, %intent, "routing message");

        // A failed turn leaves no unanswered user message in history.
        let (reply_text, actions) = match self.route(ctx, text, workspace, intent, input_type).await {
            Ok(routed) => routed,
            Err(e) => {
                ctx.pop_last();
                return Err(e);
            },
        };

        ctx.push(Role::Assistant, reply_text.clone());
        Ok(Reply { text: reply_text, workspace, intent, actions })
    }

    async fn route(
        &self,
        ctx: &mut ConversationContext,
        text: &str,
        workspace: Workspace,
        intent: Intent,
        input_type: InputType,
    ) -> Result<(String, Vec<ActionItem>), ServiceError> {
        Ok(match intent {
            Intent::NoteStart => (self.start_notes(ctx, text, workspace).await?, Vec::new()),
            Intent::NoteAdd => self.add_note(ctx, text, workspace, input_type).await?,
            Intent::NoteEnd => (self.end_notes(ctx).await?, Vec::new()),
            Intent::CalendarQuery => (self.calendar_text(text).await, Vec::new()),
            Intent::Briefing => (build_briefing(&self.calendar, BriefingKind::Morning).await, Vec::new()),
            Intent::CalendarCreate | Intent::CalendarModify | Intent::Conversation => {
                (self.converse(ctx, workspace).await?, Vec::new())
            },
        })
    }

    async fn start_notes(
        &self,
        ctx: &mut ConversationContext,
        text: &str,
        workspace: Workspace,
    ) -> Result<String, ServiceError> {
        let title = note_title(text);
        let session = self.notes.start_session(&title, workspace).await?;
        ctx.active_note_session = Some(session.id.clone());
        Ok(format!(
            "Started note session {} ({}): {}. Send notes, then say 'end notes' to finish.",
            session.id,
            workspace.as_str().to_uppercase(),
            session.title
        ))
    }

    async fn add_note(
        &self,
        ctx: &mut ConversationContext,
        text: &str,
        workspace: Workspace,
        input_type: InputType,
    ) -> Result<(String, Vec<ActionItem>), ServiceError> {
        let session_id = match ctx.active_note_session.clone() {
            Some(id) => id,
            None => self.implicit_session(ctx, workspace).await?,
        };

        let outcome = match self.notes.add_entry(&session_id, text, input_type).await {
            Err(ServiceError::SessionClosed(_) | ServiceError::NotFound { .. }) => {
                tracing::info!(session_id, "stale note session in context, starting a new one");
                let fresh = self.implicit_session(ctx, workspace).await?;
                self.notes.add_entry(&fresh, text, input_type).await?
            },
            other => other?,
        };

        let mut reply = String::from("Noted.");
        if outcome.extraction.is_failed() {
            reply.push_str(" (Action items could not be extracted.)");
        } else if !outcome.actions.is_empty() {
            reply.push_str("\n\nAction items:");
            for action in &outcome.actions {
                reply.push_str(&format!("\n- {} [{}]", action.description, action.priority.as_str()));
            }
        }
        Ok((reply, outcome.actions))
    }

    async fn implicit_session(
        &self,
        ctx: &mut ConversationContext,
        workspace: Workspace,
    ) -> Result<String, ServiceError> {
        let session = self.notes.start_session(DEFAULT_NOTE_TITLE, workspace).await?;
        ctx.active_note_session = Some(session.id.clone());
        Ok(session.id)
    }

    async fn end_notes(&self, ctx: &mut ConversationContext) -> Result<String, ServiceError> {
        let Some(session_id) = ctx.active_note_session.take() else {
            return Ok("No active note session.".to_owned());
        };

        let session = match self.notes.end_session(&session_id).await {
            Ok(session) => session,
            Err(ServiceError::SessionClosed(_) | ServiceError::NotFound { .. }) => {
                return Ok("No active note session.".to_owned());
            },
            Err(e) => {
                ctx.active_note_session = Some(session_id);
                return Err(e);
            },
        };

        let pending = self.notes.get_pending_actions().await?.len();
        Ok(format!(
            "Closed note session: {} ({} entries)\n\nSummary:\n{}\n\nPending action items: {pending}",
            session.title,
            session.entries.len(),
            session.summary.unwrap_or_default()
        ))
    }

    async fn calendar_text(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        let (heading, events) = if lower.contains("week") || lower.contains("tomorrow") {
            ("Next 7 days:", self.calendar.upcoming_events(UPCOMING_DAYS).await)
        } else {
            ("Today's calendar:", self.calendar.todays_events().await)
        };
        match events {
            Ok(events) => format!("{heading}\n{}", format_events_for_display(&events)),
            Err(ServiceError::NotConfigured(_)) => "Calendar is not connected.".to_owned(),
            Err(e) => {
                tracing::warn!(error = %e, "calendar query failed");
                "Calendar unavailable.".to_owned()
            },
        }
    }

    async fn converse(
        &self,
        ctx: &ConversationContext,
        workspace: Workspace,
    ) -> Result<String, ServiceError> {
        let model = self
            .model
            .as_deref()
            .ok_or_else(|| ServiceError::NotConfigured("language model".to_owned()))?;
        let now = Utc::now().with_timezone(&self.timezone);
        let prompt = render_system_prompt(workspace, now, ctx.active_note_session.as_deref());
        Ok(converse(model, prompt, ctx.history()).await?)
    }
}

/// Title from the text after the note trigger phrase, or a default.
fn note_title(text: &str) -> String {
    let lower = text.to_ascii_lowercase();
    let rest = NOTE_TRIGGERS
        .iter()
        .find_map(|trigger| lower.find(trigger).map(|at| &text[at + trigger.len()..]))
        .unwrap_or("");
    let rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ':' || c == '-');
    let rest = ["on ", "for ", "about "]
        .iter()
        .find_map(|prefix| {
            rest.get(..prefix.len())
                .filter(|head| head.eq_ignore_ascii_case(prefix))
                .map(|_| &rest[prefix.len()..])
        })
        .unwrap_or(rest)
        .trim();
    if rest.is_empty() { DEFAULT_NOTE_TITLE.to_owned() } else { rest.to_owned() }
}
