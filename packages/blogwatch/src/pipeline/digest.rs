//! Digest composition - one readable roundup of the posts most
//! relevant to a query.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};

use crate::error::{Result, StoreResult};
use crate::traits::Summarizer;
use crate::types::RankedRecord;

/// Compose a digest of the ranked records for a query.
///
/// An empty record set yields a fixed notice instead of an AI call.
pub async fn compose_digest<A: Summarizer>(
    summarizer: &A,
    query: &str,
    records: &[RankedRecord],
) -> Result<String> {
    if records.is_empty() {
        warn!("no posts available for digest generation");
        return Ok("No posts available for digest generation.".to_string());
    }

    info!(posts = records.len(), "generating digest");
    Ok(summarizer.compose_digest(query, records).await?)
}

/// Write digest text to `<output_dir>/summary_YYYY-MM-DD.md`.
pub fn save_digest(output_dir: &Path, digest: &str) -> StoreResult<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(output_filename());
    fs::write(&path, digest)?;
    info!(path = %path.display(), "digest saved");
    Ok(path)
}

fn output_filename() -> String {
    format!("summary_{}.md", Utc::now().format("%Y-%m-%d"))
}
