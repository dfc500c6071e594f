//! Record types - persisted blog posts and ranked search results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A processed blog post with metadata, summary, and embedding.
///
/// One record exists per URL; re-ingesting the same URL replaces the
/// record wholesale. Records are persisted as a single JSON document
/// by the store layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogRecord {
    /// Canonical URL of the post (unique key in the store)
    pub url: String,

    /// Best-effort title (never empty, falls back to a placeholder)
    pub title: String,

    /// Publication date in `YYYY-MM-DD` form
    pub date: String,

    /// Extracted text, truncated for storage economy
    pub content: String,

    /// Summary text from the AI boundary (opaque to this library)
    pub summary: String,

    /// Embedding vector for the summary
    ///
    /// Empty when no embedding has been generated. An all-zero vector
    /// marks a degraded record whose embedding call failed.
    #[serde(default)]
    pub embedding: Vec<f32>,

    /// Identifier of the model that produced `embedding`
    #[serde(default)]
    pub embedding_model: String,

    /// When the post was ingested
    pub processed_date: DateTime<Utc>,
}

impl BlogRecord {
    /// Whether this record carries an embedding at all.
    pub fn has_embedding(&self) -> bool {
        !self.embedding.is_empty()
    }
}

/// A record paired with its similarity score for a query.
#[derive(Debug, Clone)]
pub struct RankedRecord {
    /// The stored record
    pub record: BlogRecord,

    /// Cosine similarity against the query vector, range [-1, 1]
    pub score: f32,
}
