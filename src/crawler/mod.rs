//! Crawler module for page fetching and record extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with typed failures
//! - Pagination discovery from the first result page
//! - Per-container journal record extraction
//! - Overall crawl orchestration

mod extractor;
mod fetcher;
mod orchestrator;
mod pagination;

pub use extractor::{extract_records, DroppedContainer, Extraction, JournalRecord, UNKNOWN};
pub use fetcher::{build_http_client, fetch_page, page_url, FetchError};
pub use orchestrator::{run_harvest, RunSummary};
pub use pagination::{resolve_page_count, PageCount};
