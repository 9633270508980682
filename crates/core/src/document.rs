//! Indexed documents, chunk points, and cited answers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IndexStatus {
    Indexing,
    Indexed,
    Partial,
}

impl IndexStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indexing => "indexing",
            Self::Indexed => "indexed",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for IndexStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a document whose chunks live in the vector index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub doc_type: String,
    pub source_file: Option<String>,
    pub chunk_count: usize,
    pub chunks_indexed: usize,
    pub index_status: IndexStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    #[must_use]
    pub fn new(title: String, doc_type: String, source_file: Option<String>, chunk_count: usize) -> Self {
        let now = Utc::now();
        Self {
            id: document_id(&title, now),
            title,
            doc_type,
            source_file,
            chunk_count,
            chunks_indexed: 0,
            index_status: IndexStatus::Indexing,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Twelve hex characters of `sha256(title + timestamp)`.
#[must_use]
pub fn document_id(title: &str, at: DateTime<Utc>) -> String {
    let digest = Sha256::digest(format!("{title}{}", at.to_rfc3339()).as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(12);
    id
}

/// Deterministic vector point id for chunk `index` of `doc_id`.
///
/// Re-indexing a document overwrites its points instead of duplicating them.
#[must_use]
pub fn chunk_point_id(doc_id: &str, index: usize) -> u64 {
    let digest = Sha256::digest(format!("{doc_id}:{index}").as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkPayload {
    pub doc_id: String,
    pub title: String,
    pub doc_type: String,
    pub chunk_index: usize,
    pub chunk_text: String,
}

/// One embedded chunk as stored in the vector index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkPoint {
    pub point_id: u64,
    pub vector: Vec<f32>,
    pub payload: ChunkPayload,
}

impl ChunkPoint {
    #[must_use]
    pub fn new(vector: Vec<f32>, payload: ChunkPayload) -> Self {
        Self { point_id: chunk_point_id(&payload.doc_id, payload.chunk_index), vector, payload }
    }
}

/// A chunk returned by similarity search, before ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub score: f32,
    pub payload: ChunkPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Citation {
    pub rank: usize,
    pub score: f32,
    pub doc_id: String,
    pub title: String,
    pub doc_type: String,
    pub chunk_index: usize,
    pub text: String,
}

impl Citation {
    /// Rank scored chunks 1..=n in the order given.
    #[must_use]
    pub fn ranked(hits: Vec<ScoredChunk>) -> Vec<Self> {
        hits.into_iter()
            .enumerate()
            .map(|(i, hit)| Self {
                rank: i + 1,
                score: hit.score,
                doc_id: hit.payload.doc_id,
                title: hit.payload.title,
                doc_type: hit.payload.doc_type,
                chunk_index: hit.payload.chunk_index,
                text: hit.payload.chunk_text,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub citations: Vec<Citation>,
}

/// Outcome of indexing one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexReport {
    pub doc_id: String,
    pub title: String,
    pub chunks: usize,
    pub status: IndexStatus,
}

/// Build the numbered `[Source N: title]` context block handed to the model.
#[must_use]
pub fn build_context(citations: &[Citation]) -> String {
    citations
        .iter()
        .map(|c| format!("[Source {}: {}]\n{}", c.rank, c.title, c.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}
