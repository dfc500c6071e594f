//! Testing utilities including mock implementations.
//!
//! These are useful for exercising the pipelines without real network
//! or AI calls.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{AiError, AiResult, EmbeddingError, EmbeddingResult, FetchError, FetchResult};
use crate::traits::{Embedder, Embedding, PageFetcher, Summarizer};
use crate::types::RankedRecord;

/// Build a complete article page around a title, long enough to pass
/// the extraction length threshold.
pub fn article_html(title: &str) -> String {
    let body = "A paragraph of article text with enough words to count as content. ".repeat(5);
    format!(
        r#"<html>
        <head><title>{title}</title>
        <meta property="article:published_time" content="2024-03-01T08:00:00Z"></head>
        <body><article><p>{body}</p></article></body>
        </html>"#
    )
}

/// Serves canned HTML documents by URL.
///
/// Unknown URLs return an HTTP 404 failure.
#[derive(Default)]
pub struct MockFetcher {
    pages: RwLock<HashMap<String, String>>,
}

impl MockFetcher {
    /// Create an empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`.
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), html.into());
        self
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// Deterministic embedder for tests.
///
/// Unpinned texts hash into a repeatable vector; identical text always
/// produces an identical embedding.
pub struct MockEmbedder {
    dimension: usize,
    embeddings: RwLock<HashMap<String, Vec<f32>>>,
    fail: bool,
    calls: RwLock<Vec<String>>,
}

impl MockEmbedder {
    /// Create a mock embedder producing vectors of the given length.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            embeddings: RwLock::new(HashMap::new()),
            fail: false,
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Pin the embedding returned for an exact text.
    pub fn with_embedding(self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.embeddings.write().unwrap().insert(text.into(), vector);
        self
    }

    /// Make every call fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Texts passed to `embed`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    fn derive(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dimension];
        for (i, byte) in text.bytes().enumerate() {
            vector[i % self.dimension] += f32::from(byte) / 255.0;
        }
        vector
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> EmbeddingResult<Embedding> {
        self.calls.write().unwrap().push(text.to_string());
        if self.fail {
            return Err(EmbeddingError::EmptyEmbeddings);
        }
        let vector = self
            .embeddings
            .read()
            .unwrap()
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.derive(text));
        Ok(Embedding {
            vector,
            model: self.model().to_string(),
        })
    }

    fn model(&self) -> &str {
        "mock-embed"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Canned summarizer with call tracking.
#[derive(Default)]
pub struct MockSummarizer {
    summaries: RwLock<HashMap<String, String>>,
    fail: bool,
    calls: RwLock<Vec<String>>,
}

impl MockSummarizer {
    /// Create a mock summarizer with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `summary` for articles at `url`.
    pub fn with_summary(self, url: impl Into<String>, summary: impl Into<String>) -> Self {
        self.summaries
            .write()
            .unwrap()
            .insert(url.into(), summary.into());
        self
    }

    /// Make every call fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// URLs passed to `summarize_article`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize_article(&self, content: &str, _title: &str, url: &str) -> AiResult<String> {
        self.calls.write().unwrap().push(url.to_string());
        if self.fail {
            return Err(AiError::EmptyResponse);
        }
        Ok(self
            .summaries
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| format!("Mock summary of {} chars", content.chars().count())))
    }

    async fn compose_digest(&self, query: &str, records: &[RankedRecord]) -> AiResult<String> {
        if self.fail {
            return Err(AiError::EmptyResponse);
        }
        Ok(format!(
            "Digest for '{query}' covering {} posts",
            records.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_embedder_is_deterministic() {
        let embedder = MockEmbedder::new(8);
        let first = embedder.embed("hello world").await.unwrap();
        let second = embedder.embed("hello world").await.unwrap();
        let other = embedder.embed("goodbye world").await.unwrap();

        assert_eq!(first.vector, second.vector);
        assert_ne!(first.vector, other.vector);
        assert_eq!(embedder.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_mock_fetcher_unknown_url_is_404() {
        let fetcher = MockFetcher::new();
        let err = fetcher.fetch("https://nowhere.example").await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }
}
