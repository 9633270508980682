//! Shared constants for chief.
//!
//! Centralizes the defaults that several crates agree on.

/// Partition owner used when no user is configured.
pub const DEFAULT_USER_ID: &str = "steven";

/// Words per document chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Words shared between consecutive chunks.
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;

/// Number of citations returned by document search.
pub const DEFAULT_TOP_K: usize = 5;

/// Upper bound on `top_k` accepted from callers.
pub const MAX_TOP_K: usize = 50;

/// Embedding model used when none is configured.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Vector width of `text-embedding-3-small`.
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 1536;

/// Chat model used when none is configured.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Vector index collection holding document chunks.
pub const DEFAULT_DOCUMENT_COLLECTION: &str = "documents";

/// Interactions kept per contact (oldest are dropped).
pub const MAX_CONTACT_INTERACTIONS: usize = 10;

/// Interactions surfaced with tone guidelines and drafting context.
pub const RECENT_INTERACTIONS_SHOWN: usize = 3;

/// Conversation turns kept in a context before the oldest are dropped.
pub const MAX_HISTORY_TURNS: usize = 20;

/// Stored when the note summarizer fails.
pub const SUMMARY_UNAVAILABLE: &str = "Summary unavailable";

/// Returned by document Q&A when retrieval finds nothing.
pub const NO_DOCUMENTS_ANSWER: &str =
    "I couldn't find any relevant documents to answer that question.";

/// Horizon used by the credentials status report.
pub const EXPIRY_WARNING_DAYS: i64 = 90;
