//! Remote vector index backed by a Qdrant collection (REST API).

use std::time::Duration;

use async_trait::async_trait;
use chief_core::{ChunkPayload, ChunkPoint, QdrantConfig, ScoredChunk};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::StorageError;
use crate::traits::VectorIndex;

pub struct QdrantIndex {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    collection: String,
}

impl std::fmt::Debug for QdrantIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QdrantIndex")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("collection", &self.collection)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct QdrantResponse<T> {
    result: T,
}

#[derive(Deserialize)]
struct ExistsResult {
    exists: bool,
}

#[derive(Deserialize)]
struct QueryResult {
    points: Vec<ScoredPoint>,
}

#[derive(Deserialize)]
struct ScoredPoint {
    score: f32,
    payload: Option<ChunkPayload>,
}

impl QdrantIndex {
    /// # Errors
    /// Returns `StorageError::VectorIndex` if the HTTP client cannot be built.
    pub fn new(config: &QdrantConfig) -> Result<Self, StorageError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| StorageError::VectorIndex(format!("client init: {e}")))?;
        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
            collection: config.collection.clone(),
        })
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/collections/{}{suffix}", self.base_url, self.collection)
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.api_key {
            Some(key) => builder.header("api-key", key),
            None => builder,
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, StorageError> {
        let response = builder.send().await?;
        if response.status().is_success() {
            return Ok(response);
        }
        Err(Self::rejection(response).await)
    }

    /// Like `send`, but a missing collection yields `None`. The collection is
    /// created with the first indexed document.
    async fn send_existing(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<Option<reqwest::Response>, StorageError> {
        let response = builder.send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(collection = %self.collection, "Qdrant collection does not exist yet");
            return Ok(None);
        }
        if response.status().is_success() {
            return Ok(Some(response));
        }
        Err(Self::rejection(response).await)
    }

    async fn rejection(response: reqwest::Response) -> StorageError {
        let code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        StorageError::VectorIndex(format!("HTTP {code}: {body}"))
    }

    fn doc_filter(key: &str, value: &str) -> Value {
        json!({ "must": [{ "key": key, "match": { "value": value } }] })
    }
}

#[async_trait]
impl VectorIndex for QdrantIndex {
    async fn ensure_collection(&self, dimension: usize) -> Result<(), StorageError> {
        let exists: QdrantResponse<ExistsResult> = self
            .send(self.request(reqwest::Method::GET, self.url("/exists")))
            .await?
            .json()
            .await?;
        if exists.result.exists {
            return Ok(());
        }

        self.send(
            self.request(reqwest::Method::PUT, self.url(""))
                .json(&json!({ "vectors": { "size": dimension, "distance": "Cosine" } })),
        )
        .await?;
        self.send(
            self.request(reqwest::Method::PUT, self.url("/index"))
                .json(&json!({ "field_name": "doc_type", "field_schema": "keyword" })),
        )
        .await?;
        tracing::info!(collection = %self.collection, dimension, "created Qdrant collection");
        Ok(())
    }

    async fn upsert(&self, points: &[ChunkPoint]) -> Result<(), StorageError> {
        if points.is_empty() {
            return Ok(());
        }
        let body: Vec<Value> = points
            .iter()
            .map(|p| json!({ "id": p.point_id, "vector": p.vector, "payload": p.payload }))
            .collect();
        self.send(
            self.request(reqwest::Method::PUT, self.url("/points?wait=true"))
                .json(&json!({ "points": body })),
        )
        .await?;
        Ok(())
    }

    async fn search(
        &self,
        vector: &[f32],
        doc_type: Option<&str>,
        limit: usize,
    ) -> Result<Vec<ScoredChunk>, StorageError> {
        let mut body = json!({ "query": vector, "limit": limit, "with_payload": true });
        if let Some(kind) = doc_type {
            body["filter"] = Self::doc_filter("doc_type", kind);
        }

        let Some(response) = self
            .send_existing(self.request(reqwest::Method::POST, self.url("/points/query")).json(&body))
            .await?
        else {
            return Ok(Vec::new());
        };
        let response: QdrantResponse<QueryResult> = response.json().await?;

        let hits = response
            .result
            .points
            .into_iter()
            .filter_map(|p| match p.payload {
                Some(payload) => Some(ScoredChunk { score: p.score, payload }),
                None => {
                    tracing::warn!("Qdrant point without payload skipped");
                    None
                },
            })
            .collect();
        Ok(hits)
    }

    async fn delete_document(&self, doc_id: &str) -> Result<(), StorageError> {
        self.send_existing(
            self.request(reqwest::Method::POST, self.url("/points/delete?wait=true"))
                .json(&json!({ "filter": Self::doc_filter("doc_id", doc_id) })),
        )
        .await?;
        Ok(())
    }
}
