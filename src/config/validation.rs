use crate::config::types::{CatalogConfig, Config, DetailApiConfig, HttpConfig, OutputConfig};
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_catalog_config(&config.catalog)?;
    validate_detail_api_config(&config.detail_api)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates catalog listing configuration
fn validate_catalog_config(config: &CatalogConfig) -> ConfigResult<()> {
    validate_http_url("base_url", &config.base_url)?;

    if config.offer_attribute.trim().is_empty() {
        return Err(ConfigError::Validation(
            "offer_attribute cannot be empty".to_string(),
        ));
    }

    if config.page_param.trim().is_empty() {
        return Err(ConfigError::Validation(
            "page_param cannot be empty".to_string(),
        ));
    }

    if config.confirm_empty_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "confirm_empty_pages must be >= 1, got {}",
            config.confirm_empty_pages
        )));
    }

    if let Some(max_pages) = config.max_pages {
        if max_pages < 1 {
            return Err(ConfigError::Validation(format!(
                "max_pages must be >= 1, got {}",
                max_pages
            )));
        }
    }

    Ok(())
}

/// Validates detail API configuration
fn validate_detail_api_config(config: &DetailApiConfig) -> ConfigResult<()> {
    validate_http_url("endpoint", &config.endpoint)?;

    if config.format.is_empty() {
        return Err(ConfigError::Validation("format cannot be empty".to_string()));
    }

    Ok(())
}

fn validate_http_config(config: &HttpConfig) -> ConfigResult<()> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.identifiers_path.is_empty() {
        return Err(ConfigError::Validation(
            "identifiers_path cannot be empty".to_string(),
        ));
    }

    if config.details_path.is_empty() {
        return Err(ConfigError::Validation(
            "details_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Checks that `value` parses as an absolute HTTP(S) URL
fn validate_http_url(field: &str, value: &str) -> ConfigResult<()> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(())
}
