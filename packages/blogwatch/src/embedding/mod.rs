//! Voyage AI embedding client.

mod response;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::error::{EmbeddingError, EmbeddingResult};
use crate::traits::{Embedder, Embedding};
use crate::util::truncate_chars;

pub use response::decode_embedding_response;

/// Default Voyage model and its vector length.
pub const DEFAULT_MODEL: &str = "voyage-01";
pub const DEFAULT_DIMENSION: usize = 1024;

const BASE_URL: &str = "https://api.voyageai.com/v1/embeddings";

/// The provider rejects oversized inputs; truncate rather than fail.
const MAX_INPUT_CHARS: usize = 8000;

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
    input_type: &'a str,
}

/// Embedder backed by the Voyage AI HTTP API.
pub struct VoyageEmbedder {
    client: reqwest::Client,
    api_key: String,
    model: String,
    dimension: usize,
    base_url: String,
}

impl VoyageEmbedder {
    /// Create an embedder for the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            dimension: DEFAULT_DIMENSION,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Use a different model. The dimension must match what the model
    /// actually produces; it is only used to size placeholder vectors.
    pub fn with_model(mut self, model: impl Into<String>, dimension: usize) -> Self {
        self.model = model.into();
        self.dimension = dimension;
        self
    }

    /// Override the endpoint URL (tests point this at a local mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Embedder for VoyageEmbedder {
    async fn embed(&self, text: &str) -> EmbeddingResult<Embedding> {
        let input = truncate_chars(text, MAX_INPUT_CHARS);
        debug!(model = %self.model, chars = input.len(), "generating embedding");

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&EmbeddingRequest {
                model: &self.model,
                input,
                input_type: "document",
            })
            .send()
            .await
            .map_err(|e| EmbeddingError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| EmbeddingError::Http(Box::new(e)))?;
        let vector = decode_embedding_response(&body)?;

        debug!(model = %self.model, dimension = vector.len(), "embedding generated");
        Ok(Embedding {
            vector,
            model: self.model.clone(),
        })
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
