use std::sync::Arc;

use chief_core::{
    Answer, ChunkPayload, ChunkPoint, ChunkingConfig, Citation, Document, IndexReport,
    IndexStatus, MAX_TOP_K, NO_DOCUMENTS_ANSWER, chunk_text,
};
use chief_embeddings::EmbeddingProvider;
use chief_llm::{ChatModel, answer_from_context};
use chief_storage::{DocumentStore, VectorIndex};
use chrono::Utc;

use crate::error::ServiceError;

/// Document indexing and cited retrieval.
pub struct DocumentService {
    documents: Arc<dyn DocumentStore>,
    index: Arc<dyn VectorIndex>,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
    model: Option<Arc<dyn ChatModel>>,
    chunking: ChunkingConfig,
}

impl DocumentService {
    #[must_use]
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        index: Arc<dyn VectorIndex>,
        embedder: Option<Arc<dyn EmbeddingProvider>>,
        model: Option<Arc<dyn ChatModel>>,
        chunking: ChunkingConfig,
    ) -> Self {
        Self { documents, index, embedder, model, chunking }
    }

    fn embedder(&self) -> Result<&dyn EmbeddingProvider, ServiceError> {
        self.embedder
            .as_deref()
            .ok_or_else(|| ServiceError::NotConfigured("embedding provider".to_owned()))
    }

    /// Chunk, embed and index a document.
    ///
    /// Metadata is written before the first chunk is embedded. If indexing
    /// stops part way the document is left `Partial` with the number of
    /// chunks that made it into the index, and the error is returned.
    pub async fn add_document(
        &self,
        title: &str,
        content: &str,
        doc_type: &str,
        source_file: Option<String>,
    ) -> Result<IndexReport, ServiceError> {
        if title.trim().is_empty() {
            return Err(ServiceError::InvalidInput("document title is empty".to_owned()));
        }
        let chunks = self.chunks(content)?;
        let embedder = self.embedder()?;

        let mut document =
            Document::new(title.trim().to_owned(), doc_type.to_owned(), source_file, chunks.len());
        self.documents.save_document(&document).await?;
        tracing::info!(doc_id = %document.id, chunks = chunks.len(), doc_type, "indexing document");

        self.index_chunks(embedder, &mut document, &chunks).await?;
        Ok(report(&document))
    }

    /// Drop every point of an existing document and index `content` again.
    ///
    /// Point ids are derived from the document id and chunk index, so running
    /// this twice leaves the same index state as running it once.
    pub async fn reindex_document(
        &self,
        doc_id: &str,
        content: &str,
    ) -> Result<IndexReport, ServiceError> {
        let mut document = self.get_document(doc_id).await?;
        let chunks = self.chunks(content)?;
        let embedder = self.embedder()?;

        self.index.delete_document(doc_id).await?;
        document.chunk_count = chunks.len();
        document.chunks_indexed = 0;
        document.index_status = IndexStatus::Indexing;
        document.updated_at = Utc::now();
        self.documents.save_document(&document).await?;
        tracing::info!(doc_id, chunks = chunks.len(), "reindexing document");

        self.index_chunks(embedder, &mut document, &chunks).await?;
        Ok(report(&document))
    }

    /// Top `top_k` chunks for `query`, best first.
    pub async fn search(
        &self,
        query: &str,
        doc_type: Option<&str>,
        top_k: Option<usize>,
    ) -> Result<Vec<Citation>, ServiceError> {
        if query.trim().is_empty() {
            return Err(ServiceError::InvalidInput("search query is empty".to_owned()));
        }
        let limit = top_k.unwrap_or(self.chunking.top_k).clamp(1, MAX_TOP_K);
        let vector = self.embedder()?.embed(query).await?;
        let mut hits = self.index.search(&vector, doc_type, limit).await?;
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(limit);
        Ok(Citation::ranked(hits))
    }

    /// Answer `question` from retrieved chunks, with citations.
    ///
    /// When retrieval finds nothing the model is not called.
    pub async fn query_with_answer(
        &self,
        question: &str,
        doc_type: Option<&str>,
    ) -> Result<Answer, ServiceError> {
        let citations = self.search(question, doc_type, None).await?;
        if citations.is_empty() {
            return Ok(Answer { answer: NO_DOCUMENTS_ANSWER.to_owned(), citations });
        }
        let model = self
            .model
            .as_deref()
            .ok_or_else(|| ServiceError::NotConfigured("language model".to_owned()))?;
        let answer = answer_from_context(model, question, &citations).await?;
        Ok(Answer { answer, citations })
    }

    pub async fn list_documents(&self, doc_type: Option<&str>) -> Result<Vec<Document>, ServiceError> {
        Ok(self.documents.list_documents(doc_type).await?)
    }

    pub async fn get_document(&self, doc_id: &str) -> Result<Document, ServiceError> {
        self.documents
            .get_document(doc_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("document", doc_id))
    }

    /// Remove a document's chunks and metadata.
    pub async fn delete_document(&self, doc_id: &str) -> Result<(), ServiceError> {
        self.index.delete_document(doc_id).await?;
        if !self.documents.delete_document(doc_id).await? {
            return Err(ServiceError::not_found("document", doc_id));
        }
        tracing::info!(doc_id, "document deleted");
        Ok(())
    }

    fn chunks(&self, content: &str) -> Result<Vec<String>, ServiceError> {
        let chunks = chunk_text(content, self.chunking.chunk_size, self.chunking.overlap)?;
        if chunks.is_empty() {
            return Err(ServiceError::InvalidInput("document content is empty".to_owned()));
        }
        Ok(chunks)
    }

    async fn index_chunks(
        &self,
        embedder: &dyn EmbeddingProvider,
        document: &mut Document,
        chunks: &[String],
    ) -> Result<(), ServiceError> {
        let result = self.upsert_chunks(embedder, document, chunks).await;

        document.updated_at = Utc::now();
        document.index_status = match &result {
            Ok(()) => IndexStatus::Indexed,
            Err(e) => {
                tracing::warn!(
                    doc_id = %document.id,
                    indexed = document.chunks_indexed,
                    total = document.chunk_count,
                    error = %e,
                    "document indexing stopped part way"
                );
                IndexStatus::Partial
            },
        };
        self.documents.save_document(document).await?;
        result
    }

    async fn upsert_chunks(
        &self,
        embedder: &dyn EmbeddingProvider,
        document: &mut Document,
        chunks: &[String],
    ) -> Result<(), ServiceError> {
        self.index.ensure_collection(embedder.dimension()).await?;
        for (chunk_index, text) in chunks.iter().enumerate() {
            let vector = embedder.embed(text).await?;
            let point = ChunkPoint::new(
                vector,
                ChunkPayload {
                    doc_id: document.id.clone(),
                    title: document.title.clone(),
                    doc_type: document.doc_type.clone(),
                    chunk_index,
                    chunk_text: text.clone(),
                },
            );
            self.index.upsert(std::slice::from_ref(&point)).await?;
            document.chunks_indexed += 1;
        }
        Ok(())
    }
}

fn report(document: &Document) -> IndexReport {
    IndexReport {
        doc_id: document.id.clone(),
        title: document.title.clone(),
        chunks: document.chunks_indexed,
        status: document.index_status,
    }
}
