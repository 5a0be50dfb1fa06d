//! Crawl orchestration - the page loop and its failure policy
//!
//! The orchestrator drives one run end to end:
//! - Init: create the run context (output directory, log sink); the only
//!   fatal failure point
//! - FetchingFirstPage: fetch page 1, resolve the total page count
//! - Paginating: pages 2..N sequentially, with an inter-request delay
//! - Finalizing: hand the dataset to the CSV, chart, and table collaborators
//!
//! A failed page costs that page's records and one ERROR log entry, nothing
//! more; the run always finalizes with whatever it collected.

use crate::config::HarvestConfig;
use crate::context::{LogLevel, RunContext};
use crate::crawler::extractor::{extract_records, JournalRecord};
use crate::crawler::fetcher::{build_http_client, fetch_page, page_url};
use crate::crawler::pagination::resolve_page_count;
use crate::output;
use crate::{ConfigError, HarvestError};
use scraper::Html;
use std::path::{Path, PathBuf};
use url::Url;

/// Outcome of a completed run
#[derive(Debug)]
pub struct RunSummary {
    /// All records, in page order then in-page order
    pub records: Vec<JournalRecord>,

    /// Total pages the loop attempted
    pub pages_total: u32,

    /// Pages lost to fetch errors
    pub pages_failed: u32,

    pub output_dir: PathBuf,
    pub csv_path: PathBuf,
    pub log_path: PathBuf,
}

/// Runs one complete harvest for the configured keyword
///
/// Returns an error only for setup-class failures (bad base URL, output
/// location, HTTP client construction). Everything after the first fetch is
/// best-effort: fetch errors are logged and skipped, and Finalizing always
/// runs, even over an empty dataset.
pub async fn run_harvest(config: &HarvestConfig) -> Result<RunSummary, HarvestError> {
    let base_url = Url::parse(&config.base_url).map_err(|e| {
        HarvestError::Config(ConfigError::InvalidUrl(format!(
            "Invalid base_url '{}': {}",
            config.base_url, e
        )))
    })?;

    let mut context = RunContext::create(Path::new(&config.output_root), &config.keyword)?;
    context.log(
        LogLevel::Info,
        &format!(
            "Output directory created at: {}",
            context.output_dir().display()
        ),
    );
    context.log(
        LogLevel::Info,
        &format!(
            "Visualization directory created at: {}",
            context.viz_dir().display()
        ),
    );

    let client = build_http_client(config.fetch_timeout())?;

    let mut pages_failed = 0u32;

    // First page doubles as pagination discovery.
    let first_url = page_url(&base_url, &config.keyword, 1);
    let pages_total = match fetch_page(&client, &first_url).await {
        Ok(doc) => {
            let count = resolve_page_count(&doc);
            if let Some(reason) = &count.fallback {
                tracing::warn!("Pagination fallback: {}", reason);
                context.log(
                    LogLevel::Warning,
                    &format!("Pagination fallback: {}; assuming a single page", reason),
                );
            }
            context.log(
                LogLevel::Info,
                &format!("Starting scraping process for {} pages", count.pages),
            );
            append_page(&mut context, 1, &doc);
            count.pages
        }
        Err(e) => {
            // A run that cannot load page 1 still produces well-formed,
            // empty output rather than crashing.
            tracing::error!("Failed to fetch page 1: {}", e);
            context.log(
                LogLevel::Error,
                &format!("Error fetching page 1 ({}): {}", first_url, e),
            );
            pages_failed += 1;
            1
        }
    };

    for page in 2..=pages_total {
        // Throttle before every fetch after the first.
        tokio::time::sleep(config.inter_page_delay()).await;

        context.log(
            LogLevel::Info,
            &format!("Scraping page {}/{}", page, pages_total),
        );

        let url = page_url(&base_url, &config.keyword, page);
        match fetch_page(&client, &url).await {
            Ok(doc) => append_page(&mut context, page, &doc),
            Err(e) => {
                tracing::error!("Skipping page {}: {}", page, e);
                context.log(
                    LogLevel::Error,
                    &format!("Error fetching page {} ({}): {}", page, url, e),
                );
                pages_failed += 1;
            }
        }
    }

    finalize(&mut context);

    Ok(RunSummary {
        records: context.records().to_vec(),
        pages_total,
        pages_failed,
        output_dir: context.output_dir().to_path_buf(),
        csv_path: context.csv_path().to_path_buf(),
        log_path: context.log_path().to_path_buf(),
    })
}

/// Extracts one fetched page into the context, logging dropped containers
fn append_page(context: &mut RunContext, page: u32, doc: &Html) {
    let extraction = extract_records(doc);

    for dropped in &extraction.dropped {
        let message = format!(
            "Dropped entry {} on page {}: journal name missing",
            dropped.index, page
        );
        tracing::warn!("{}", message);
        context.log(LogLevel::Warning, &message);
    }

    tracing::info!(
        "Extracted {} records from page {}",
        extraction.records.len(),
        page
    );

    for record in extraction.records {
        context.append(record);
    }
}

/// Hands the final dataset to the persistence and visualization collaborators
///
/// Failures here are logged but do not fail the run; the dataset has already
/// been collected and every artifact that can be written is written.
fn finalize(context: &mut RunContext) {
    context.log(
        LogLevel::Info,
        &format!("Collected {} records, writing outputs", context.records().len()),
    );

    let records = context.records().to_vec();
    let csv_path = context.csv_path().to_path_buf();
    match output::write_csv(&csv_path, &records) {
        Ok(()) => context.log(
            LogLevel::Info,
            &format!("Data saved to {}", csv_path.display()),
        ),
        Err(e) => {
            tracing::error!("Failed to write CSV: {}", e);
            context.log(LogLevel::Error, &format!("Error saving to CSV: {}", e));
        }
    }

    let bar_path = context.viz_dir().join("affiliation_distribution.png");
    let pie_path = context.viz_dir().join("accreditation_distribution.png");
    let charts = output::render_affiliation_chart(&bar_path, &records)
        .and_then(|_| output::render_accreditation_chart(&pie_path, &records));
    match charts {
        Ok(()) => context.log(LogLevel::Info, "Visualizations created successfully"),
        Err(e) => {
            tracing::error!("Failed to render charts: {}", e);
            context.log(
                LogLevel::Error,
                &format!("Error creating visualizations: {}", e),
            );
        }
    }

    output::print_table(&records);

    context.log(LogLevel::Info, "Scraping process completed successfully");
}
