//! Blog Ingestion and Semantic Retrieval Library
//!
//! Ingests web articles, derives normalized metadata and embedding
//! vectors, persists them as a single JSON document, and retrieves
//! the most relevant records for a free-text query by cosine
//! similarity.
//!
//! # Design Philosophy
//!
//! - Best-effort extraction: ordered fallback chains, never a panic
//! - Skip-and-continue ingestion: one bad URL never halts a batch
//! - Brute-force ranking: a linear scan, not an ANN index
//! - External services behind traits, mockable end to end
//!
//! # Usage
//!
//! ```rust,ignore
//! use blogwatch::{
//!     ingest_urls, process_query, rank, AnthropicSummarizer, HttpFetcher,
//!     IngestConfig, JsonFileStore, VoyageEmbedder,
//! };
//!
//! let fetcher = HttpFetcher::new();
//! let store = JsonFileStore::open("data/blog_data.json")?;
//! let embedder = VoyageEmbedder::new(voyage_key);
//! let summarizer = AnthropicSummarizer::new(anthropic_key);
//!
//! // Ingestion path
//! let result = ingest_urls(&urls, &IngestConfig::new(), &fetcher, &store, &embedder, &summarizer).await?;
//!
//! // Retrieval path
//! let query = process_query(&embedder, "vector tile updates").await?;
//! let top = rank(&store, &query, 10).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (PageFetcher, Embedder, Summarizer, RecordStore)
//! - [`types`] - Records, extracted articles, query vectors
//! - [`extract`] - Multi-strategy title/date/body extraction
//! - [`pipeline`] - Ingestion loop and digest composition
//! - [`similarity`] - Cosine ranking over stored records
//! - [`stores`] - Storage implementations (JSON file, in-memory)
//! - [`testing`] - Mock implementations for tests

pub mod ai;
pub mod config;
pub mod embedding;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod query;
pub mod similarity;
pub mod sources;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

mod util;

// Re-export core types at crate root
pub use error::{
    AiError, BlogwatchError, EmbeddingError, FetchError, Result, SimilarityError, StoreError,
};
pub use traits::{Embedder, Embedding, PageFetcher, RecordStore, Summarizer};
pub use types::{BlogRecord, ExtractedArticle, QueryVector, RankedRecord};

// Re-export component implementations
pub use ai::AnthropicSummarizer;
pub use config::Settings;
pub use embedding::VoyageEmbedder;
pub use fetch::HttpFetcher;
pub use stores::{JsonFileStore, MemoryStore};

// Re-export pipeline entry points
pub use pipeline::{compose_digest, ingest_urls, save_digest, IngestConfig, IngestResult};
pub use query::process_query;
pub use similarity::{cosine_similarity, rank};
