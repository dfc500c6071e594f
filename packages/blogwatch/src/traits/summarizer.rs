//! Summarizer trait for the generative AI boundary.

use async_trait::async_trait;

use crate::error::AiResult;
use crate::types::RankedRecord;

/// Generative summarization over article content.
///
/// Implementations wrap a specific LLM provider and handle prompting
/// and response parsing. The summary text is opaque to the rest of the
/// library - it is stored, embedded, and echoed back verbatim.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize a single article.
    async fn summarize_article(&self, content: &str, title: &str, url: &str) -> AiResult<String>;

    /// Compose a digest of the ranked records most relevant to a query.
    async fn compose_digest(&self, query: &str, records: &[RankedRecord]) -> AiResult<String>;
}
