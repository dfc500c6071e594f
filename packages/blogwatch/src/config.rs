//! Environment-driven settings.

use std::env;
use std::path::PathBuf;

/// Default number of posts in a digest.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Runtime settings, loaded from the environment.
///
/// A `.env` file in the working directory is honored when present.
/// Every field has a default except the API keys, which stay `None`
/// until set; constructors that need a key check at the call site.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Anthropic API key (`ANTHROPIC_API_KEY`)
    pub anthropic_api_key: Option<String>,

    /// Voyage API key (`VOYAGE_API_KEY`)
    pub voyage_api_key: Option<String>,

    /// Generation model (`ANTHROPIC_MODEL`)
    pub anthropic_model: String,

    /// Embedding model (`EMBEDDING_MODEL`)
    pub embedding_model: String,

    /// Embedding vector length (`EMBEDDING_DIMENSION`)
    pub embedding_dimension: usize,

    /// URL source file (`URL_FILE`, default `data/urls.txt`)
    pub url_file: PathBuf,

    /// JSON store document (`STORAGE_FILE`, default `data/blog_data.json`)
    pub storage_file: PathBuf,

    /// Digest output directory (`OUTPUT_DIR`, default `output`)
    pub output_dir: PathBuf,
}

impl Settings {
    /// Load settings, falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        Self {
            anthropic_api_key: env::var("ANTHROPIC_API_KEY").ok(),
            voyage_api_key: env::var("VOYAGE_API_KEY").ok(),
            anthropic_model: env::var("ANTHROPIC_MODEL")
                .unwrap_or_else(|_| crate::ai::DEFAULT_MODEL.to_string()),
            embedding_model: env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| crate::embedding::DEFAULT_MODEL.to_string()),
            embedding_dimension: env::var("EMBEDDING_DIMENSION")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(crate::embedding::DEFAULT_DIMENSION),
            url_file: env::var("URL_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(&data_dir).join("urls.txt")),
            storage_file: env::var("STORAGE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(&data_dir).join("blog_data.json")),
            output_dir: env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output")),
        }
    }
}
