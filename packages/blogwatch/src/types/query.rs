//! Query types - ephemeral, never persisted.

/// A user query with its normalized text and embedding.
#[derive(Debug, Clone)]
pub struct QueryVector {
    /// The query as the user typed it
    pub original_text: String,

    /// Whitespace-collapsed, trimmed form that was embedded
    pub normalized_text: String,

    /// Embedding vector for the normalized text
    pub embedding: Vec<f32>,

    /// Identifier of the model that produced `embedding`
    pub embedding_model: String,
}
