use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ai_types::Message;
use crate::chat_model::ChatModel;
use crate::error::LlmError;

/// Replays canned replies in order and records every request.
pub(crate) struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    pub(crate) requests: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedModel {
    pub(crate) fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self { replies: Mutex::new(replies.into()), requests: Mutex::new(Vec::new()) }
    }

    pub(crate) fn replying(reply: &str) -> Self {
        Self::new(vec![Ok(reply.to_owned())])
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, messages: &[Message], _max_tokens: Option<u32>) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        self.replies.lock().unwrap().pop_front().unwrap_or(Err(LlmError::EmptyResponse))
    }
}
