use crate::config::types::{Config, CrawlerConfig, ExtractConfig, FetchConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_fetch_config(&config.fetch)?;
    validate_extract_config(&config.extract)?;
    Ok(())
}

/// Validates frontier expansion settings
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.batch_size < 1 {
        return Err(ConfigError::Validation(format!(
            "batch_size must be >= 1, got {}",
            config.batch_size
        )));
    }

    if config.max_concurrency < 1 || config.max_concurrency > 100 {
        return Err(ConfigError::Validation(format!(
            "max_concurrency must be between 1 and 100, got {}",
            config.max_concurrency
        )));
    }

    if config.max_rounds == Some(0) {
        return Err(ConfigError::Validation(
            "max_rounds must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates HTTP client settings
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "connect_timeout_secs must be >= 1".to_string(),
        ));
    }

    if let Some(proxy) = &config.proxy_url {
        Url::parse(proxy)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid proxy_url: {}", e)))?;
    }

    if config.proxy_username.is_some() && config.proxy_url.is_none() {
        return Err(ConfigError::Validation(
            "proxy_username requires proxy_url".to_string(),
        ));
    }

    if config.proxy_password.is_some() && config.proxy_username.is_none() {
        return Err(ConfigError::Validation(
            "proxy_password requires proxy_username".to_string(),
        ));
    }

    Ok(())
}

/// Validates link extraction settings
fn validate_extract_config(config: &ExtractConfig) -> Result<(), ConfigError> {
    let selector = config.content_selector.trim();
    if !selector.is_empty() && Selector::parse(selector).is_err() {
        return Err(ConfigError::Validation(format!(
            "content_selector is not a valid CSS selector: '{}'",
            selector
        )));
    }

    if matches!(&config.href_prefix, Some(prefix) if prefix.is_empty()) {
        return Err(ConfigError::Validation(
            "href_prefix cannot be empty (omit it to follow all links)".to_string(),
        ));
    }

    Ok(())
}
