//! Typed errors for the blogwatch library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Each external boundary
//! gets its own error enum so callers can apply per-boundary policy.

use thiserror::Error;

/// Errors that can occur in the ingestion and retrieval pipelines.
#[derive(Debug, Error)]
pub enum BlogwatchError {
    /// Page fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Embedding service failed
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Summarization service failed
    #[error("AI service error: {0}")]
    Ai(#[from] AiError),

    /// Storage operation failed
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Similarity ranking failed
    #[error("similarity error: {0}")]
    Similarity(#[from] SimilarityError),
}

/// Errors that can occur fetching a page over HTTP.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-2xx response status
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },
}

/// Errors from the embedding service boundary.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-2xx response from the API
    #[error("embedding API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not one of the supported shapes
    #[error("unrecognized embedding response shape, keys: {keys:?}")]
    UnexpectedShape { keys: Vec<String> },

    /// Response carried an empty embeddings list
    #[error("empty embeddings list in response")]
    EmptyEmbeddings,

    /// Embedding values could not be decoded as numbers
    #[error("malformed embedding payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
}

/// Errors from the summarization service boundary.
#[derive(Debug, Error)]
pub enum AiError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-2xx response from the API
    #[error("AI API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Response contained no usable text content
    #[error("AI response contained no content")]
    EmptyResponse,
}

/// Errors persisting or loading records.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record (de)serialization failed
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors during similarity ranking.
///
/// Vectors from different embedding models are never comparable, so
/// ranking fails fast instead of producing a meaningless score.
#[derive(Debug, Error)]
pub enum SimilarityError {
    /// Query and record were embedded with different models
    #[error("embedding model mismatch: query uses {query}, record {url} uses {record}")]
    ModelMismatch {
        query: String,
        record: String,
        url: String,
    },

    /// Query and record vectors have different lengths
    #[error("embedding dimension mismatch: query has {query}, record {url} has {record}")]
    DimensionMismatch {
        query: usize,
        record: usize,
        url: String,
    },
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, BlogwatchError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for embedding operations.
pub type EmbeddingResult<T> = std::result::Result<T, EmbeddingError>;

/// Result type alias for summarization operations.
pub type AiResult<T> = std::result::Result<T, AiError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
