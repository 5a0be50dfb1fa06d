//! Sinta-Harvest: a scraper for the SINTA journal directory
//!
//! This crate crawls the paginated journal search results for one keyword,
//! extracts structured journal records, and writes a CSV file, two chart
//! images, and a per-run activity log under a timestamped output directory.

pub mod config;
pub mod context;
pub mod crawler;
pub mod output;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for harvest operations
///
/// Only setup-class failures (output location, log sink, HTTP client) abort
/// a run. Per-page fetch and extraction problems are absorbed by the
/// orchestrator and recorded in the run log instead.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to prepare output location {}: {source}", path.display())]
    Setup {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::HarvestConfig;
pub use context::{LogLevel, RunContext};
pub use crawler::{run_harvest, FetchError, JournalRecord, RunSummary};
