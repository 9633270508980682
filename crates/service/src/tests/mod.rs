//! Shared fixtures for service tests: a temp database, a scripted chat
//! model and a keyword embedder.

mod assistant_tests;
mod record_tests;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chief_core::AppConfig;
use chief_embeddings::{EmbeddingError, EmbeddingProvider};
use chief_llm::{ChatModel, LlmError, Message};
use chief_storage::Storage;
use tempfile::TempDir;

use crate::{Collaborators, Services};

/// Replies from a queue; an empty queue or an `Err` entry fails the call.
#[derive(Default)]
pub struct MockModel {
    replies: Mutex<VecDeque<Result<String, ()>>>,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl MockModel {
    pub fn replying(replies: &[&str]) -> Arc<Self> {
        let model = Self::default();
        model.replies.lock().unwrap().extend(replies.iter().map(|r| Ok((*r).to_owned())));
        Arc::new(model)
    }

    pub fn push_failure(&self) {
        self.replies.lock().unwrap().push_back(Err(()));
    }

    pub fn push_reply(&self, reply: &str) {
        self.replies.lock().unwrap().push_back(Ok(reply.to_owned()));
    }

    pub fn user_turns_in_last_request(&self) -> usize {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map_or(0, |msgs| msgs.iter().filter(|m| m.role == "user").count())
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_user_message(&self) -> Option<String> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .and_then(|msgs| msgs.iter().rev().find(|m| m.role == "user").map(|m| m.content.clone()))
    }
}

#[async_trait]
impl ChatModel for MockModel {
    async fn complete(&self, messages: &[Message], _max_tokens: Option<u32>) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(())) | None => {
                Err(LlmError::HttpStatus { code: 500, body: "scripted failure".to_owned() })
            },
        }
    }
}

const VOCABULARY: [&str; 8] =
    ["overtime", "leave", "drone", "smoke", "risk", "faa", "sick", "safety"];

/// One dimension per vocabulary word, counting occurrences.
#[derive(Default)]
pub struct KeywordEmbedder {
    calls: AtomicUsize,
    fail_after: Option<usize>,
}

impl KeywordEmbedder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Succeeds `n` times, then fails every call.
    pub fn failing_after(n: usize) -> Arc<Self> {
        Arc::new(Self { calls: AtomicUsize::new(0), fail_after: Some(n) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for KeywordEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_after.is_some_and(|limit| n >= limit) {
            return Err(EmbeddingError::HttpStatus { code: 503, body: "unavailable".to_owned() });
        }
        let lower = text.to_lowercase();
        Ok(VOCABULARY.iter().map(|w| lower.matches(w).count() as f32 + 0.01).collect())
    }

    fn dimension(&self) -> usize {
        VOCABULARY.len()
    }
}

pub struct TestServices {
    pub services: Services,
    pub model: Arc<MockModel>,
    pub embedder: Arc<KeywordEmbedder>,
    _dir: TempDir,
}

pub fn create_test_services_with(model: Arc<MockModel>, embedder: Arc<KeywordEmbedder>) -> TestServices {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::local(dir.path().join("chief.db"));
    let storage = Arc::new(Storage::new(&config.db_path, 4).unwrap());
    let services = Services::with_storage(
        &config,
        storage,
        Collaborators {
            model: Some(model.clone()),
            embedder: Some(embedder.clone()),
            ..Collaborators::default()
        },
    );
    TestServices { services, model, embedder, _dir: dir }
}

pub fn create_test_services(replies: &[&str]) -> TestServices {
    create_test_services_with(MockModel::replying(replies), KeywordEmbedder::new())
}
