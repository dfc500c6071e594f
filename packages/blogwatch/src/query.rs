//! Query processing - normalization and embedding.

use tracing::info;

use crate::error::Result;
use crate::traits::Embedder;
use crate::types::QueryVector;

/// Collapse whitespace runs and trim. The semantic content of the
/// query is left untouched.
pub fn normalize_query(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize the query text and obtain its embedding.
///
/// A failed embedding here is terminal for the query - there is no
/// zero-vector fallback on the retrieval path.
pub async fn process_query<E: Embedder>(embedder: &E, text: &str) -> Result<QueryVector> {
    info!(query = %text, "processing query");
    let normalized = normalize_query(text);
    let embedding = embedder.embed(&normalized).await?;

    Ok(QueryVector {
        original_text: text.to_string(),
        normalized_text: normalized,
        embedding: embedding.vector,
        embedding_model: embedding.model,
    })
}
