use crate::ai_types::Message;
use crate::chat_model::ChatModel;
use crate::error::LlmError;

pub const SUMMARY_SYSTEM_PROMPT: &str = "Summarize these notes in 2-3 bullet points. Be concise.";

const SUMMARY_MAX_TOKENS: u32 = 300;

/// Summarize a newline-joined note transcript.
///
/// An empty transcript is still sent; the model decides what to say.
///
/// # Errors
/// Propagates the model error; callers decide on a fallback.
pub async fn summarize_notes(model: &dyn ChatModel, transcript: &str) -> Result<String, LlmError> {
    let messages = [Message::system(SUMMARY_SYSTEM_PROMPT), Message::user(transcript)];
    let summary = model.complete(&messages, Some(SUMMARY_MAX_TOKENS)).await?;
    Ok(summary.trim().to_owned())
}
