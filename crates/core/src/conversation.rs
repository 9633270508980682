//! Per-conversation state passed explicitly through the assistant.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_HISTORY_TURNS;
use crate::intent::Intent;
use crate::notes::ActionItem;
use crate::workspace::Workspace;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// History and note-session state for one conversation.
///
/// History keeps at most [`MAX_HISTORY_TURNS`] turns; older ones are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationContext {
    history: VecDeque<ChatTurn>,
    pub active_note_session: Option<String>,
    pub workspace: Workspace,
}

impl ConversationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.history.push_back(ChatTurn { role, content: content.into() });
        while self.history.len() > MAX_HISTORY_TURNS {
            self.history.pop_front();
        }
    }

    /// Remove the most recent turn.
    pub fn pop_last(&mut self) -> Option<ChatTurn> {
        self.history.pop_back()
    }

    pub fn history(&self) -> impl Iterator<Item = &ChatTurn> {
        self.history.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

/// The assistant's answer to one inbound message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub workspace: Workspace,
    pub intent: Intent,
    #[serde(default)]
    pub actions: Vec<ActionItem>,
}
