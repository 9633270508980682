//! Language-model integration for chief
//!
//! An OpenAI-compatible chat-completions client behind the [`ChatModel`]
//! seam, plus the prompt builders for action-item extraction, note
//! summaries, cited document answers and free conversation.

pub mod ai_types;
mod answer;
mod chat_model;
mod client;
mod conversation;
mod error;
mod extraction;
mod summary;

#[cfg(test)]
mod extraction_tests;
#[cfg(test)]
mod test_support;

pub use ai_types::Message;
pub use answer::{RAG_SYSTEM_PROMPT, answer_from_context};
pub use chat_model::ChatModel;
pub use client::{LlmClient, truncate};
pub use conversation::{SYSTEM_PROMPT_TEMPLATE, converse, render_system_prompt};
pub use error::LlmError;
pub use extraction::{EXTRACTION_SYSTEM_PROMPT, extract_action_items, parse_extraction};
pub use summary::{SUMMARY_SYSTEM_PROMPT, summarize_notes};
