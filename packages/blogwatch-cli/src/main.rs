use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogwatch::{
    compose_digest, ingest_urls, process_query, rank, save_digest, sources, AnthropicSummarizer,
    HttpFetcher, IngestConfig, JsonFileStore, Settings, VoyageEmbedder,
};

#[derive(Parser)]
#[command(
    name = "blogwatch",
    about = "Ingest blog posts and retrieve them by semantic similarity"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch, summarize, embed, and store posts from the URL file
    Ingest {
        /// URL source file (defaults to the configured data dir)
        #[arg(long)]
        sources: Option<PathBuf>,

        /// Re-process URLs that already have a stored record
        #[arg(long)]
        force_refresh: bool,
    },

    /// Rank stored posts against a query and write a digest
    Query {
        /// Free-text query
        text: String,

        /// Maximum number of posts to return
        #[arg(long, default_value_t = blogwatch::config::DEFAULT_RESULT_LIMIT)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Settings first: a .env file may carry RUST_LOG.
    let settings = Settings::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Ingest {
            sources,
            force_refresh,
        } => run_ingest(settings, sources, force_refresh).await,
        Command::Query { text, limit } => run_query(settings, &text, limit).await,
    }
}

async fn run_ingest(
    settings: Settings,
    source_file: Option<PathBuf>,
    force_refresh: bool,
) -> Result<()> {
    let voyage_key = settings
        .voyage_api_key
        .clone()
        .context("VOYAGE_API_KEY is not set")?;
    let anthropic_key = settings
        .anthropic_api_key
        .clone()
        .context("ANTHROPIC_API_KEY is not set")?;

    let url_file = source_file.unwrap_or_else(|| settings.url_file.clone());
    sources::ensure_source_file(&url_file)?;
    let urls = sources::load_urls(&url_file)?;
    if urls.is_empty() {
        bail!(
            "no URLs found in {}; add blog URLs to the file first",
            url_file.display()
        );
    }

    let fetcher = HttpFetcher::new();
    let store = JsonFileStore::open(&settings.storage_file)?;
    let embedder = VoyageEmbedder::new(voyage_key)
        .with_model(settings.embedding_model.clone(), settings.embedding_dimension);
    let summarizer =
        AnthropicSummarizer::new(anthropic_key).with_model(settings.anthropic_model.clone());

    let mut config = IngestConfig::new();
    if force_refresh {
        config = config.force_refresh();
    }

    let result = ingest_urls(&urls, &config, &fetcher, &store, &embedder, &summarizer).await?;
    println!(
        "Processed {} post(s), skipped {}, {} failed.",
        result.processed,
        result.skipped,
        result.failed_urls.len()
    );
    for url in &result.failed_urls {
        println!("  failed: {url}");
    }
    Ok(())
}

async fn run_query(settings: Settings, text: &str, limit: usize) -> Result<()> {
    let voyage_key = settings
        .voyage_api_key
        .clone()
        .context("VOYAGE_API_KEY is not set")?;
    let anthropic_key = settings
        .anthropic_api_key
        .clone()
        .context("ANTHROPIC_API_KEY is not set")?;

    let store = JsonFileStore::open(&settings.storage_file)?;
    let embedder = VoyageEmbedder::new(voyage_key)
        .with_model(settings.embedding_model.clone(), settings.embedding_dimension);
    let summarizer =
        AnthropicSummarizer::new(anthropic_key).with_model(settings.anthropic_model.clone());

    let query = process_query(&embedder, text).await?;
    let ranked = rank(&store, &query, limit).await?;

    if ranked.is_empty() {
        println!("No matching posts found. Run `blogwatch ingest` first.");
        return Ok(());
    }

    println!(
        "Top {} post(s) for \"{}\":",
        ranked.len(),
        query.normalized_text
    );
    for (i, entry) in ranked.iter().enumerate() {
        println!(
            "{:>3}. [{:.4}] {} ({})",
            i + 1,
            entry.score,
            entry.record.title,
            entry.record.url
        );
    }

    let digest = compose_digest(&summarizer, &query.normalized_text, &ranked).await?;
    let path = save_digest(&settings.output_dir, &digest)?;
    println!("\nDigest saved to {}", path.display());
    Ok(())
}
