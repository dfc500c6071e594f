//! URL source file handling.

use std::fs;
use std::path::Path;

use tracing::{info, warn};
use url::Url;

use crate::error::StoreResult;

const SAMPLE_CONTENTS: &str = "\
# Add blog URLs here, one per line
https://www.example.com/blog/first-post/
https://www.example.com/blog/second-post/
";

/// Create a commented sample file when none exists.
pub fn ensure_source_file(path: &Path) -> StoreResult<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(path, SAMPLE_CONTENTS)?;
    info!(path = %path.display(), "created sample URL file");
    Ok(())
}

/// Load URLs from a text file.
///
/// Blank lines and `#` comments are skipped; lines that do not parse
/// as http(s) URLs are dropped with a warning.
pub fn load_urls(path: &Path) -> StoreResult<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    let mut urls = Vec::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if is_valid_url(line) {
            urls.push(line.to_string());
        } else {
            warn!(line = %line, "invalid URL format");
        }
    }

    info!(count = urls.len(), path = %path.display(), "loaded URLs");
    Ok(urls)
}

fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
