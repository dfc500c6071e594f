//! In-memory storage implementation for testing and development.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::traits::RecordStore;
use crate::types::BlogRecord;

/// Order-preserving in-memory store.
///
/// Useful for testing and development. Not suitable for production
/// as data is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<BlogRecord>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all stored records.
    pub fn clear(&self) {
        self.records.write().unwrap().clear();
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn upsert(&self, record: &BlogRecord) -> StoreResult<()> {
        let mut records = self.records.write().unwrap();
        match records.iter().position(|r| r.url == record.url) {
            Some(index) => records[index] = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(())
    }

    async fn load_all(&self) -> StoreResult<Vec<BlogRecord>> {
        Ok(self.records.read().unwrap().clone())
    }

    async fn exists(&self, url: &str) -> StoreResult<bool> {
        Ok(self.records.read().unwrap().iter().any(|r| r.url == url))
    }
}
