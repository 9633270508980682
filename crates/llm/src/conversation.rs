use chief_core::{ChatTurn, Role, Workspace};
use chrono::{DateTime, FixedOffset};

use crate::ai_types::Message;
use crate::chat_model::ChatModel;
use crate::error::LlmError;

pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are CHIEF (Contextual Helper for Integrated Executive Functions), a personal executive assistant for a Fire Rescue Chief Officer.

Your user is Steven, Chief of Community Risk Reduction at Sunrise Fire-Rescue in South Florida. He has 17+ years of emergency services experience, holds an MBA, is pursuing an MS in Disaster & Emergency Management, and is applying to PhD programs. His career goal is to become a fire chief within 3-5 years.

## Your Capabilities:
- Calendar management (view, create, modify events)
- Note-taking with action item extraction
- Morning briefings and EOD summaries
- Professional development tracking (EFO, certifications, CEUs)
- Wellness monitoring integration

## Workspace Context:
You operate across five domains:
{workspaces}

## Communication Style:
- Be concise and direct (SMS-friendly responses)
- Use professional but warm tone
- Always cite sources when referencing policies or documents
- Proactively surface conflicts and anomalies

## Current Context:
Workspace: {workspace}
Time: {current_time}
Active Note Session: {note_session}

Respond helpfully to the user's request.";

const CONVERSATION_MAX_TOKENS: u32 = 1024;

/// Fill the system prompt placeholders.
#[must_use]
pub fn render_system_prompt(
    workspace: Workspace,
    now: DateTime<FixedOffset>,
    note_session: Option<&str>,
) -> String {
    let workspaces = Workspace::ALL
        .iter()
        .map(|w| format!("{}. {} - {}", w.priority(), w.as_str().to_uppercase(), w.description()))
        .collect::<Vec<_>>()
        .join("\n");

    SYSTEM_PROMPT_TEMPLATE
        .replace("{workspaces}", &workspaces)
        .replace("{workspace}", &workspace.as_str().to_uppercase())
        .replace("{current_time}", &now.format("%Y-%m-%d %H:%M").to_string())
        .replace("{note_session}", note_session.unwrap_or("None active"))
}

/// Continue a conversation. `history` should already end with the user turn.
///
/// # Errors
/// Propagates the model error.
pub async fn converse<'a>(
    model: &dyn ChatModel,
    system_prompt: String,
    history: impl IntoIterator<Item = &'a ChatTurn>,
) -> Result<String, LlmError> {
    let mut messages = vec![Message::system(system_prompt)];
    messages.extend(history.into_iter().map(|turn| match turn.role {
        Role::User => Message::user(turn.content.clone()),
        Role::Assistant => Message::assistant(turn.content.clone()),
    }));
    model.complete(&messages, Some(CONVERSATION_MAX_TOKENS)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn system_prompt_fills_context() {
        let tz = FixedOffset::west_opt(4 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2026, 10, 19, 7, 30, 0).unwrap();
        let prompt = render_system_prompt(Workspace::Planning, now, None);

        assert!(prompt.contains("Workspace: PLANNING"));
        assert!(prompt.contains("Time: 2026-10-19 07:30"));
        assert!(prompt.contains("Active Note Session: None active"));
        assert!(prompt.contains("1. COMMAND - City manager, council, union, strategic policy"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn system_prompt_names_active_session() {
        let now = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let prompt = render_system_prompt(Workspace::Command, now, Some("a1b2c3d4"));
        assert!(prompt.contains("Active Note Session: a1b2c3d4"));
    }
}
