//! CLI entry point: fetch jobs, normalize them, write a JSON list to disk.
//!
//! Examples:
//!
//! ```text
//! fetch_jobs --out jobs.json
//! fetch_jobs --out jobs.json --limit 100 --query "embedded firmware"
//! fetch_jobs --out jobs.json --filter-electronics
//! ```

mod output;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use job_engine::{default_registry, fetch_all, FetchConfig};

#[derive(Parser)]
#[command(name = "fetch_jobs")]
#[command(about = "Fetch and normalize jobs from multiple sources")]
struct Cli {
    /// Output JSON file path
    #[arg(long)]
    out: PathBuf,

    /// Max jobs to output (soft cap)
    #[arg(long, default_value_t = 20)]
    limit: usize,

    /// Optional search query passed to sources
    #[arg(long)]
    query: Option<String>,

    /// Keep only electronics/hardware roles
    #[arg(long)]
    filter_electronics: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,job_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let cli = Cli::parse();

    let mut config = FetchConfig::new().with_limit(cli.limit);
    if let Some(query) = cli.query {
        config = config.with_query(query);
    }
    if cli.filter_electronics {
        config = config.filter_electronics();
    }

    let registry = default_registry();
    let outcome = fetch_all(&registry, &config).await;

    if !outcome.is_complete() {
        tracing::warn!(
            failed = ?outcome.failed_sources,
            "Some sources contributed nothing this run"
        );
    }

    output::write_jobs(&cli.out, &outcome.jobs)?;

    tracing::info!(count = outcome.jobs.len(), out = %cli.out.display(), "Run complete");
    println!("Wrote {} jobs to: {}", outcome.jobs.len(), cli.out.display());

    Ok(())
}
