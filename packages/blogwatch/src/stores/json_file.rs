//! JSON file storage - the whole collection serialized as one document.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::traits::RecordStore;
use crate::types::BlogRecord;

/// Stores records as a single pretty-printed, human-readable JSON
/// array on disk.
///
/// Every upsert rewrites the whole document: writes go to a temporary
/// file in the same directory and rename over the target, so a crash
/// mid-write leaves the previous document intact. Not safe for
/// concurrent writers.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at the given path, creating parent directories and
    /// an empty document when missing.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if !path.exists() {
            if let Some(dir) = path.parent() {
                if !dir.as_os_str().is_empty() {
                    fs::create_dir_all(dir)?;
                }
            }
            fs::write(&path, "[]")?;
            info!(path = %path.display(), "created new storage file");
        }
        Ok(Self { path })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_records(&self) -> StoreResult<Vec<BlogRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_records(&self, records: &[BlogRecord]) -> StoreResult<()> {
        let serialized = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serialized)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn upsert(&self, record: &BlogRecord) -> StoreResult<()> {
        let mut records = self.read_records()?;
        match records.iter().position(|r| r.url == record.url) {
            Some(index) => {
                records[index] = record.clone();
                debug!(url = %record.url, "updated existing entry");
            }
            None => {
                records.push(record.clone());
                debug!(url = %record.url, "added new entry");
            }
        }
        self.write_records(&records)
    }

    async fn load_all(&self) -> StoreResult<Vec<BlogRecord>> {
        self.read_records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    fn record(url: &str, title: &str) -> BlogRecord {
        BlogRecord {
            url: url.to_string(),
            title: title.to_string(),
            date: "2024-01-01".to_string(),
            content: "content".to_string(),
            summary: "summary".to_string(),
            embedding: vec![0.5],
            embedding_model: "test-model".to_string(),
            processed_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_open_bootstraps_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/blog_data.json");
        let store = JsonFileStore::open(&path).unwrap();

        assert!(path.exists());
        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_appends_then_replaces_in_place() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("blog_data.json")).unwrap();

        store.upsert(&record("https://a.example", "A")).await.unwrap();
        store.upsert(&record("https://b.example", "B")).await.unwrap();
        store
            .upsert(&record("https://a.example", "A v2"))
            .await
            .unwrap();

        let records = store.load_all().await.unwrap();
        assert_eq!(records.len(), 2);
        // The replaced record kept its position.
        assert_eq!(records[0].url, "https://a.example");
        assert_eq!(records[0].title, "A v2");
        assert_eq!(records[1].url, "https://b.example");
    }

    #[tokio::test]
    async fn test_exists() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("blog_data.json")).unwrap();

        store.upsert(&record("https://a.example", "A")).await.unwrap();
        assert!(store.exists("https://a.example").await.unwrap());
        assert!(!store.exists("https://b.example").await.unwrap());
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blog_data.json");
        let store = JsonFileStore::open(&path).unwrap();
        store.upsert(&record("https://a.example", "A")).await.unwrap();

        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_empty_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blog_data.json");
        fs::write(&path, "").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_document_is_human_readable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blog_data.json");
        let store = JsonFileStore::open(&path).unwrap();
        store.upsert(&record("https://a.example", "A")).await.unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        // Pretty-printed, one field per line.
        assert!(contents.contains("\n  {"));
        assert!(contents.contains(r#""url": "https://a.example""#));
    }
}
