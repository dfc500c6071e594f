//! Embedding response decoding.
//!
//! Providers have shipped three wire shapes for the same payload. The
//! decoder is a pure function over the parsed body, separate from the
//! transport call, so new shapes slot in without touching failure
//! handling.

use serde_json::Value;

use crate::error::{EmbeddingError, EmbeddingResult};

/// Decode an embedding vector from any of the supported shapes:
/// `{"data": [{"embedding": [...]}]}`, `{"embedding": [...]}`, or
/// `{"embeddings": [[...]]}`.
///
/// An empty `data`/`embeddings` list is a service error, not a valid
/// empty vector.
pub fn decode_embedding_response(body: &Value) -> EmbeddingResult<Vec<f32>> {
    if let Some(data) = body.get("data").and_then(Value::as_array) {
        let first = data.first().ok_or(EmbeddingError::EmptyEmbeddings)?;
        if let Some(embedding) = first.get("embedding") {
            return decode_vector(embedding);
        }
    } else if let Some(embedding) = body.get("embedding") {
        return decode_vector(embedding);
    } else if let Some(embeddings) = body.get("embeddings").and_then(Value::as_array) {
        let first = embeddings.first().ok_or(EmbeddingError::EmptyEmbeddings)?;
        return decode_vector(first);
    }

    Err(EmbeddingError::UnexpectedShape {
        keys: response_keys(body),
    })
}

fn decode_vector(value: &Value) -> EmbeddingResult<Vec<f32>> {
    serde_json::from_value(value.clone()).map_err(EmbeddingError::MalformedPayload)
}

fn response_keys(body: &Value) -> Vec<String> {
    body.as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}
