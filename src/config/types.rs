use serde::Deserialize;
use std::time::Duration;

/// Default journal directory to scrape
pub const DEFAULT_BASE_URL: &str = "https://sinta.kemdikbud.go.id/journals/";

/// Default search keyword
pub const DEFAULT_KEYWORD: &str = "teknologi informasi";

/// Configuration for one harvest run
///
/// All fields have documented defaults, so an empty TOML file (or no file at
/// all) yields a usable configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Base URL of the journal directory
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Search keyword for filtering journals
    pub keyword: String,

    /// Delay between page requests (milliseconds)
    #[serde(rename = "inter-page-delay-ms")]
    pub inter_page_delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "fetch-timeout-secs")]
    pub fetch_timeout_secs: u64,

    /// Directory under which per-run output directories are created
    #[serde(rename = "output-root")]
    pub output_root: String,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            keyword: DEFAULT_KEYWORD.to_string(),
            inter_page_delay_ms: 2000,
            fetch_timeout_secs: 10,
            output_root: "scraped_data".to_string(),
        }
    }
}

impl HarvestConfig {
    /// Delay applied before each page fetch after the first
    pub fn inter_page_delay(&self) -> Duration {
        Duration::from_millis(self.inter_page_delay_ms)
    }

    /// Timeout applied to each HTTP request
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
