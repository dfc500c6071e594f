//! Storage trait for processed records.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::BlogRecord;

/// A keyed collection of processed records.
///
/// At most one record exists per URL. Implementations are free to
/// choose their persistence strategy as long as upsert replaces the
/// matching record in place (preserving its position) and appends
/// otherwise.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert the record, or replace the existing record with the same URL.
    async fn upsert(&self, record: &BlogRecord) -> StoreResult<()>;

    /// Load every stored record in insertion order.
    async fn load_all(&self) -> StoreResult<Vec<BlogRecord>>;

    /// Whether a record exists for the URL.
    async fn exists(&self, url: &str) -> StoreResult<bool> {
        Ok(self.load_all().await?.iter().any(|r| r.url == url))
    }
}
