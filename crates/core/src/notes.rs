//! Note sessions, their entries, and the action items extracted from them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::workspace::Workspace;

/// How a note entry reached the assistant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Voice,
    Sms,
}

impl InputType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Sms => "sms",
        }
    }
}

impl FromStr for InputType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "voice" => Ok(Self::Voice),
            "sms" => Ok(Self::Sms),
            _ => Err(CoreError::invalid("input type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Closed,
}

impl SessionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteEntry {
    pub timestamp: DateTime<Utc>,
    pub content: String,
    pub input_type: InputType,
}

/// A bounded note-taking interaction.
///
/// Sessions start `Active` and move to `Closed` exactly once, at which point
/// `ended_at` and `summary` are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteSession {
    pub id: String,
    pub user_id: String,
    pub workspace: Workspace,
    pub title: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: SessionStatus,
    pub entries: Vec<NoteEntry>,
    pub summary: Option<String>,
}

impl NoteSession {
    #[must_use]
    pub fn new(id: String, user_id: String, title: String, workspace: Workspace) -> Self {
        Self {
            id,
            user_id,
            workspace,
            title,
            started_at: Utc::now(),
            ended_at: None,
            status: SessionStatus::Active,
            entries: Vec::new(),
            summary: None,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Entry contents joined by newlines, the summarizer's input.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.entries.iter().map(|e| e.content.as_str()).collect::<Vec<_>>().join("\n")
    }

    /// Mark the session closed with the given summary.
    pub fn close(&mut self, summary: String) {
        self.status = SessionStatus::Closed;
        self.ended_at = Some(Utc::now());
        self.summary = Some(summary);
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Lenient parse used on model output: anything unrecognised is `Medium`.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    #[default]
    Pending,
    Done,
}

impl ActionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

/// A task extracted from notes or added by hand. Never deleted, only completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: String,
    pub description: String,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    pub priority: Priority,
    pub status: ActionStatus,
    pub workspace: Workspace,
    pub source_session: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ActionItem {
    /// Materialize an extracted action as a pending item.
    #[must_use]
    pub fn from_extracted(
        id: String,
        extracted: ExtractedAction,
        workspace: Workspace,
        source_session: Option<String>,
    ) -> Self {
        Self {
            id,
            description: extracted.description,
            assignee: extracted.assignee,
            due_date: extracted.due_date,
            priority: extracted.priority,
            status: ActionStatus::Pending,
            workspace,
            source_session,
            created_at: Utc::now(),
        }
    }
}

/// One action as reported by the extraction model, before it gets an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedAction {
    pub description: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

/// Result of running the extractor over one note entry.
///
/// A model or parse failure is reported as `Failed` so callers can tell
/// "nothing to do" apart from "could not tell".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Extraction {
    Extracted { actions: Vec<ExtractedAction> },
    Failed { reason: String },
}

impl Extraction {
    #[must_use]
    pub fn actions(&self) -> &[ExtractedAction] {
        match self {
            Self::Extracted { actions } => actions,
            Self::Failed { .. } => &[],
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// What `add_entry` hands back: the stored entry, the extraction verdict and
/// the action items persisted from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryOutcome {
    pub entry: NoteEntry,
    pub extraction: Extraction,
    pub actions: Vec<ActionItem>,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
