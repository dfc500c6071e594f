//! Fetcher trait for raw page retrieval.

use async_trait::async_trait;

use crate::error::FetchResult;

/// Retrieves raw HTML for a URL.
///
/// Implementations wrap an HTTP client; tests use a mock that serves
/// canned documents.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the raw HTML body for a URL.
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}
