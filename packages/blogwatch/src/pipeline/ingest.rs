//! Ingestion pipeline - fetch, extract, summarize, embed, store.

use chrono::Utc;
use tracing::{info, warn};

use crate::error::Result;
use crate::extract::{self, MIN_CONTENT_LENGTH};
use crate::traits::{Embedder, PageFetcher, RecordStore, Summarizer};
use crate::types::BlogRecord;
use crate::util::truncate_chars;

/// Stored content is truncated to this many characters.
const STORED_CONTENT_CHARS: usize = 5000;

/// Configuration for ingest operations.
#[derive(Debug, Clone, Default)]
pub struct IngestConfig {
    /// Re-process URLs that already have a stored record.
    pub force_refresh: bool,
}

impl IngestConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-process URLs even when a record already exists.
    pub fn force_refresh(mut self) -> Self {
        self.force_refresh = true;
        self
    }
}

/// Result of an ingest operation.
#[derive(Debug, Clone, Default)]
pub struct IngestResult {
    /// Number of URLs fully processed and stored
    pub processed: usize,

    /// Number of URLs skipped because a record already existed
    pub skipped: usize,

    /// URLs that failed to process
    pub failed_urls: Vec<String>,
}

impl IngestResult {
    /// Whether every URL was either processed or deliberately skipped.
    pub fn is_success(&self) -> bool {
        self.failed_urls.is_empty()
    }
}

/// Ingest a batch of URLs: fetch, extract, summarize, embed, store.
///
/// URLs are processed one at a time. One bad URL never halts the
/// batch: fetch and extraction failures skip the URL, while
/// summarization and embedding failures degrade the record (see
/// [`process_url`]) and ingestion continues.
pub async fn ingest_urls<F, S, E, A>(
    urls: &[String],
    config: &IngestConfig,
    fetcher: &F,
    store: &S,
    embedder: &E,
    summarizer: &A,
) -> Result<IngestResult>
where
    F: PageFetcher,
    S: RecordStore,
    E: Embedder,
    A: Summarizer,
{
    let mut result = IngestResult::default();

    for url in urls {
        if !config.force_refresh && store.exists(url).await? {
            info!(url = %url, "skipping already processed URL");
            result.skipped += 1;
            continue;
        }

        match process_url(url, fetcher, embedder, summarizer).await {
            Some(record) => match store.upsert(&record).await {
                Ok(()) => result.processed += 1,
                Err(e) => {
                    warn!(url = %url, error = %e, "failed to store record");
                    result.failed_urls.push(url.clone());
                }
            },
            None => result.failed_urls.push(url.clone()),
        }
    }

    info!(
        processed = result.processed,
        skipped = result.skipped,
        failed = result.failed_urls.len(),
        "ingest completed"
    );
    Ok(result)
}

/// Process one URL into a record; `None` means the URL was skipped.
///
/// Degradation policy, by stage:
/// - fetch failure or a body under [`MIN_CONTENT_LENGTH`] chars: skip.
/// - summarization failure: the record keeps a placeholder summary.
/// - embedding failure: the record keeps a zero vector of the expected
///   dimension. This is an intentional availability-over-correctness
///   tradeoff - the record ranks at zero until re-ingested - and is
///   always surfaced as a warning.
pub async fn process_url<F, E, A>(
    url: &str,
    fetcher: &F,
    embedder: &E,
    summarizer: &A,
) -> Option<BlogRecord>
where
    F: PageFetcher,
    E: Embedder,
    A: Summarizer,
{
    info!(url = %url, "processing blog post");

    let html = match fetcher.fetch(url).await {
        Ok(html) => html,
        Err(e) => {
            warn!(url = %url, error = %e, "error fetching content");
            return None;
        }
    };

    let article = extract::extract(&html, url);
    let content_chars = article.text.chars().count();
    if content_chars < MIN_CONTENT_LENGTH {
        warn!(url = %url, chars = content_chars, "content too short or not found");
        return None;
    }

    let summary = match summarizer
        .summarize_article(&article.text, &article.title, url)
        .await
    {
        Ok(summary) => summary,
        Err(e) => {
            warn!(url = %url, error = %e, "summarization failed, storing placeholder");
            format!("Summary unavailable: {e}")
        }
    };

    let (embedding, embedding_model) = match embedder.embed(&summary).await {
        Ok(embedding) => (embedding.vector, embedding.model),
        Err(e) => {
            warn!(url = %url, error = %e, "embedding failed, substituting zero vector");
            (
                vec![0.0; embedder.dimension()],
                embedder.model().to_string(),
            )
        }
    };

    info!(url = %url, "successfully processed blog post");
    Some(BlogRecord {
        url: url.to_string(),
        title: article.title,
        date: article.date,
        content: truncate_chars(&article.text, STORED_CONTENT_CHARS).to_string(),
        summary,
        embedding,
        embedding_model,
        processed_date: Utc::now(),
    })
}
