use std::time::Duration;

use async_trait::async_trait;
use chief_core::EmbeddingConfig;
use serde::{Deserialize, Serialize};

use crate::{EmbeddingError, EmbeddingProvider};

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

pub struct OpenAiEmbedder {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    dimension: usize,
}

impl std::fmt::Debug for OpenAiEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiEmbedder")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

impl OpenAiEmbedder {
    /// # Errors
    /// Returns `EmbeddingError::ClientInit` if the HTTP client cannot be built.
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        dimension: usize,
    ) -> Result<Self, EmbeddingError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| EmbeddingError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_owned(),
            model,
            dimension,
        })
    }

    /// # Errors
    /// Returns `EmbeddingError::NotConfigured` when no API key is available.
    pub fn from_config(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            EmbeddingError::NotConfigured(
                "set CHIEF_EMBEDDING_API_KEY or CHIEF_LLM_API_KEY".to_owned(),
            )
        })?;
        Self::new(api_key, config.base_url.clone(), config.model.clone(), config.dimension)
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let response = self
            .client
            .post(format!("{}/v1/embeddings", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&EmbeddingRequest { model: &self.model, input: text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(code = status.as_u16(), "embedding request rejected");
            return Err(EmbeddingError::HttpStatus { code: status.as_u16(), body });
        }

        let parsed: EmbeddingResponse = response.json().await?;
        let embedding =
            parsed.data.into_iter().next().map(|d| d.embedding).ok_or(EmbeddingError::EmptyResult)?;

        if embedding.len() != self.dimension {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimension,
                actual: embedding.len(),
            });
        }
        Ok(embedding)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn embedder(server: &MockServer, dimension: usize) -> OpenAiEmbedder {
        OpenAiEmbedder::new("emb-key".into(), server.uri(), "text-embedding-3-small".into(), dimension)
            .unwrap()
    }

    #[tokio::test]
    async fn returns_first_embedding() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/embeddings"))
            .and(header("Authorization", "Bearer emb-key"))
            .and(body_partial_json(serde_json::json!({ "input": "overtime" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "embedding": [0.1, 0.2, 0.3], "index": 0 }]
            })))
            .mount(&server)
            .await;

        let vector = embedder(&server, 3).embed("overtime").await.unwrap();
        assert_eq!(vector, vec![0.1, 0.2, 0.3]);
    }

    #[tokio::test]
    async fn wrong_width_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "embedding": [0.1, 0.2] }]
            })))
            .mount(&server)
            .await;

        let err = embedder(&server, 3).embed("x").await.unwrap_err();
        assert!(matches!(err, EmbeddingError::DimensionMismatch { expected: 3, actual: 2 }));
    }

    #[tokio::test]
    async fn http_errors_carry_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/embeddings"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .mount(&server)
            .await;

        let err = embedder(&server, 3).embed("x").await.unwrap_err();
        assert!(matches!(err, EmbeddingError::HttpStatus { code: 401, .. }));
    }
}
