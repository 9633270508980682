//! Embedding generation for document retrieval
//!
//! [`EmbeddingProvider`] is the seam the document service depends on;
//! [`OpenAiEmbedder`] talks to any `/v1/embeddings`-compatible endpoint.

mod error;
mod openai;

use async_trait::async_trait;

pub use error::EmbeddingError;
pub use openai::OpenAiEmbedder;

/// Turns text into fixed-width vectors.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Width of every vector this provider returns.
    fn dimension(&self) -> usize;
}
