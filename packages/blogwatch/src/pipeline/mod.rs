//! Ingestion and digest pipelines.

pub mod digest;
pub mod ingest;

pub use digest::{compose_digest, save_digest};
pub use ingest::{ingest_urls, IngestConfig, IngestResult};
