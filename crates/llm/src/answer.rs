use chief_core::{Citation, build_context};

use crate::ai_types::Message;
use crate::chat_model::ChatModel;
use crate::error::LlmError;

pub const RAG_SYSTEM_PROMPT: &str = "You are a helpful assistant answering questions about fire department policies, procedures, and labor agreements. \
Answer only from the provided documents. Always cite your sources using [Source N] format. \
If the documents don't contain the answer, say so. Be concise and direct.";

const ANSWER_MAX_TOKENS: u32 = 1024;

/// Answer `question` using only the retrieved `citations` as context.
///
/// # Errors
/// Propagates the model error.
pub async fn answer_from_context(
    model: &dyn ChatModel,
    question: &str,
    citations: &[Citation],
) -> Result<String, LlmError> {
    let context = build_context(citations);
    let prompt = format!(
        "Based on these documents, answer the question.\n\nDOCUMENTS:\n{context}\n\nQUESTION: {question}\n\nProvide a clear answer with citations."
    );
    let messages = [Message::system(RAG_SYSTEM_PROMPT), Message::user(prompt)];
    model.complete(&messages, Some(ANSWER_MAX_TOKENS)).await
}
