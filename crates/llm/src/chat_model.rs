use async_trait::async_trait;

use crate::ai_types::Message;
use crate::error::LlmError;

/// Anything that can turn a message list into one assistant reply.
///
/// [`crate::LlmClient`] is the production implementation; services take
/// `Arc<dyn ChatModel>` so tests can substitute a scripted model.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Return the content of the first choice.
    async fn complete(&self, messages: &[Message], max_tokens: Option<u32>) -> Result<String, LlmError>;
}
