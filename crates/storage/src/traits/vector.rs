use async_trait::async_trait;
use chief_core::{ChunkPoint, ScoredChunk};

use crate::error::StorageError;

/// Similarity index over document chunks.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Create the backing collection if it does not exist yet.
    async fn ensure_collection(&self, dimension: usize) -> Result<(), StorageError>;

    /// Insert or overwrite points by id.
    async fn upsert(&self, points: &[ChunkPoint]) -> Result<(), StorageError>;

    /// Up to `limit` chunks by descending similarity, optionally restricted
    /// to an exact `doc_type`.
    async fn search(
        &self,
        vector: &[f32],
        doc_type: Option<&str>,
        limit: usize,
    ) -> Result<Vec<ScoredChunk>, StorageError>;

    /// Remove every point belonging to `doc_id`.
    async fn delete_document(&self, doc_id: &str) -> Result<(), StorageError>;
}
