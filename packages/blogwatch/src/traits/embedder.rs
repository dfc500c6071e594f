//! Embedder trait for the embedding service boundary.

use async_trait::async_trait;

use crate::error::EmbeddingResult;

/// An embedding vector plus the model that produced it.
///
/// Vectors from different models have different dimensionality and are
/// never compared against each other.
#[derive(Debug, Clone)]
pub struct Embedding {
    /// The vector values
    pub vector: Vec<f32>,

    /// Identifier of the producing model
    pub model: String,
}

/// Converts text into a fixed-length numeric vector.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding for the given text.
    ///
    /// Input longer than the provider maximum is truncated by the
    /// implementation before the call.
    async fn embed(&self, text: &str) -> EmbeddingResult<Embedding>;

    /// Identifier of the model behind this embedder.
    fn model(&self) -> &str;

    /// Expected vector length for this embedder's model.
    ///
    /// Used to build a placeholder vector when a call fails and the
    /// caller chooses to degrade rather than abort.
    fn dimension(&self) -> usize;
}
