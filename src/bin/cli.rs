//! CLI binary for quotegen.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use quotegen::render::format_entries;
use quotegen::{ExtractionMode, QuoteCollector, QuoteConfig};
use quotegen_search::BackendKind;
use tracing_subscriber::EnvFilter;

/// quotegen: find attributed quotes about any topic.
#[derive(Parser)]
#[command(name = "quotegen", version, about)]
struct Cli {
    /// Topic to find quotes about (e.g. success, failure, love, friendship).
    topic: String,

    /// Number of distinct quotes to collect.
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search backend: serpapi or duckduckgo.
    #[arg(short, long)]
    backend: Option<BackendKind>,

    /// SerpAPI key (overrides config and environment).
    #[arg(long, env = "SERPAPI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Also accept unquoted "text - Author" snippets (more hits, more noise).
    #[arg(long)]
    loose: bool,

    /// Top up a short list from the built-in curated set (marked as curated).
    #[arg(long)]
    include_curated: bool,

    /// Print entries as JSON instead of a numbered list.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Users can override with RUST_LOG=debug to see everything.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("quotegen=info,quotegen_search=warn")),
        )
        .init();

    let cli = Cli::parse();

    let topic = cli.topic.trim();
    if topic.is_empty() {
        eprintln!("Please enter a topic to generate quotes!");
        return Ok(ExitCode::from(2));
    }

    let mut config = match cli.config {
        Some(ref path) => QuoteConfig::from_file(path)?,
        None => {
            let default_path = QuoteConfig::default_config_path();
            if default_path.exists() {
                QuoteConfig::from_file(&default_path)?
            } else {
                QuoteConfig::default()
            }
        }
    };

    if let Some(backend) = cli.backend {
        config.search.backend = backend;
    }
    if let Some(key) = cli.api_key {
        config.search.api_key = Some(key);
    }
    if let Some(count) = cli.count {
        config.collect.target = count;
    }
    if cli.loose {
        config.extract.mode = ExtractionMode::Loose;
    }
    if cli.include_curated {
        config.collect.include_curated = true;
    }
    config.validate()?;

    let backend = config.search.build_backend()?;
    tracing::info!(
        backend = %config.search.backend,
        target = config.collect.target,
        "collecting quotes"
    );

    let collector = QuoteCollector::from_config(backend, &config);
    let report = collector.collect_report(topic, config.collect.target).await;

    if !report.failures.is_empty() {
        tracing::info!(
            failed = report.failures.len(),
            issued = report.queries_issued,
            "some queries failed"
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.entries)?);
    } else {
        print!("{}", format_entries(topic, &report.entries));
    }

    Ok(ExitCode::SUCCESS)
}
