use chief_core::{ExtractedAction, Extraction, Priority, Workspace, strip_markdown_json};
use serde::Deserialize;

use crate::ai_types::Message;
use crate::chat_model::ChatModel;
use crate::client::truncate;

pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"Extract action items from the note. Return JSON array:
[{"description": "task", "assignee": "name or null", "due_date": "date or null", "priority": "high/medium/low"}]
If no actions found, return empty array: []
Only return valid JSON, nothing else."#;

const EXTRACTION_MAX_TOKENS: u32 = 500;

#[derive(Deserialize)]
struct RawAction {
    description: String,
    #[serde(default)]
    assignee: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    priority: Option<String>,
}

/// Models sometimes write the string "null" where JSON null was asked for.
fn nullable(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("null"))
}

/// Parse a model reply into extracted actions.
///
/// Code fences are stripped first. Entries with a blank description are
/// dropped; unknown priorities become `medium`.
///
/// # Errors
/// Returns a human-readable reason when the reply is not a JSON array of
/// action objects.
pub fn parse_extraction(reply: &str) -> Result<Vec<ExtractedAction>, String> {
    let content = strip_markdown_json(reply);
    let raw: Vec<RawAction> = serde_json::from_str(content).map_err(|e| {
        format!("model reply is not an action array: {e} (content: {})", truncate(content, 200))
    })?;

    Ok(raw
        .into_iter()
        .filter(|a| !a.description.trim().is_empty())
        .map(|a| ExtractedAction {
            description: a.description.trim().to_owned(),
            assignee: nullable(a.assignee),
            due_date: nullable(a.due_date),
            priority: a.priority.as_deref().map_or(Priority::Medium, Priority::from_str_lossy),
        })
        .collect())
}

/// Ask the model for the action items in one note entry.
///
/// Never fails outright: transport and parse problems come back as
/// [`Extraction::Failed`] so the caller can still persist the entry.
pub async fn extract_action_items(
    model: &dyn ChatModel,
    content: &str,
    workspace: Workspace,
) -> Extraction {
    let messages = [Message::system(EXTRACTION_SYSTEM_PROMPT), Message::user(content)];

    let reply = match model.complete(&messages, Some(EXTRACTION_MAX_TOKENS)).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(%workspace, error = %e, "action extraction request failed");
            return Extraction::Failed { reason: e.to_string() };
        },
    };

    match parse_extraction(&reply) {
        Ok(actions) => {
            tracing::debug!(%workspace, count = actions.len(), "extracted action items");
            Extraction::Extracted { actions }
        },
        Err(reason) => {
            tracing::warn!(%workspace, %reason, "action extraction reply unusable");
            Extraction::Failed { reason }
        },
    }
}
