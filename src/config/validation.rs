use crate::config::types::HarvestConfig;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &HarvestConfig) -> Result<(), ConfigError> {
    validate_base_url(&config.base_url)?;
    validate_keyword(&config.keyword)?;

    if config.fetch_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetch_timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.output_root.is_empty() {
        return Err(ConfigError::Validation(
            "output_root cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that the base URL is a well-formed absolute HTTP(S) URL
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url '{}': {}", base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}

/// Validates the search keyword
fn validate_keyword(keyword: &str) -> Result<(), ConfigError> {
    if keyword.trim().is_empty() {
        return Err(ConfigError::Validation(
            "keyword cannot be empty".to_string(),
        ));
    }

    // The keyword names the output directory, so path separators are out.
    if keyword.contains('/') || keyword.contains('\\') {
        return Err(ConfigError::Validation(format!(
            "keyword cannot contain path separators, got '{}'",
            keyword
        )));
    }

    Ok(())
}
