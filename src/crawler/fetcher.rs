//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester, including:
//! - Building an HTTP client with a proper user agent and timeout
//! - Building paginated search URLs
//! - GET requests returning parsed documents
//! - Error classification
//!
//! The fetcher never retries; the orchestrator decides what a failed page
//! means for the run.

use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// A failed page fetch, classified by cause
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, timeout, TLS failure, etc.
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-2xx status
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    /// The response body could not be read or decoded
    #[error("failed to read response body from {url}: {message}")]
    ParseFailure { url: String, message: String },
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `timeout` - Per-request timeout, applied from connect to body completion
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("sinta-harvest/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the search URL for one result page
///
/// The directory expects `?page={n}&q={keyword}`; the keyword is
/// percent-encoded by the query serializer.
pub fn page_url(base: &Url, keyword: &str, page: u32) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("page", &page.to_string())
        .append_pair("q", keyword);
    url
}

/// Fetches one result page and parses it into a document
///
/// Emits an informational log entry with URL and status on success. On
/// failure the returned [`FetchError`] says which of network, HTTP status,
/// or body decoding went wrong; disposition is left to the caller.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<Html, FetchError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify_request_error(url, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    tracing::info!("Fetched {} ({})", url, status);

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::ParseFailure {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    Ok(Html::parse_document(&body))
}

/// Classifies a transport-level reqwest error
fn classify_request_error(url: &Url, error: &reqwest::Error) -> FetchError {
    let message = if error.is_timeout() {
        "request timeout".to_string()
    } else if error.is_connect() {
        "connection refused".to_string()
    } else {
        error.to_string()
    };

    FetchError::Network {
        url: url.to_string(),
        message,
    }
}
