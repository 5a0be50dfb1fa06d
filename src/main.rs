//! Sinta-Harvest main entry point
//!
//! Command-line interface for the SINTA journal directory scraper.

use clap::Parser;
use sinta_harvest::config::{load_config, validate, HarvestConfig};
use sinta_harvest::crawler::run_harvest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sinta-Harvest: a journal directory scraper
///
/// Crawls the paginated SINTA journal search results for one keyword and
/// writes a CSV file, distribution charts, and a run log under a
/// timestamped output directory.
#[derive(Parser, Debug)]
#[command(name = "sinta-harvest")]
#[command(version)]
#[command(about = "Scrapes journal records from the SINTA directory", long_about = None)]
struct Cli {
    /// Override the base URL of the journal directory
    #[arg(long)]
    base_url: Option<String>,

    /// Override the search keyword
    #[arg(long)]
    keyword: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => HarvestConfig::default(),
    };

    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(keyword) = cli.keyword {
        config.keyword = keyword;
    }
    validate(&config)?;

    tracing::info!(
        "Scraping '{}' from {} (delay {}ms, timeout {}s)",
        config.keyword,
        config.base_url,
        config.inter_page_delay_ms,
        config.fetch_timeout_secs
    );

    let summary = run_harvest(&config).await?;

    if summary.pages_failed > 0 {
        tracing::warn!(
            "{} of {} pages failed; see the run log for details",
            summary.pages_failed,
            summary.pages_total
        );
    }

    println!(
        "Scraping completed. Data saved to {}",
        summary.csv_path.display()
    );
    println!(
        "Visualizations saved in {}",
        summary.output_dir.join("visualizations").display()
    );
    println!("Log file location: {}", summary.log_path.display());

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sinta_harvest=info,warn"),
            1 => EnvFilter::new("sinta_harvest=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
