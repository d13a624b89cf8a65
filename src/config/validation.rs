use crate::config::types::{Config, OutputConfig, SiteConfig};
use crate::model::{CategoryRef, CrawlConfig};
use crate::url::parse_site_url;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_crawl_limits(&config.crawl)?;
    validate_categories(&config.categories)?;
    validate_output_config(&config.output)?;
    Ok(())
}

fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    parse_site_url(&config.root_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid root-url: {}", e)))?;

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    Ok(())
}

/// Rejects non-positive page and company limits
pub fn validate_crawl_limits(limits: &CrawlConfig) -> Result<(), ConfigError> {
    if limits.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max-pages must be >= 1, got {}",
            limits.max_pages
        )));
    }

    if limits.max_companies < 1 {
        return Err(ConfigError::Validation(format!(
            "max-companies must be >= 1, got {}",
            limits.max_companies
        )));
    }

    Ok(())
}

fn validate_categories(categories: &[CategoryRef]) -> Result<(), ConfigError> {
    for category in categories {
        if category.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "Category with url '{}' must have a name",
                category.url
            )));
        }

        parse_site_url(&category.url).map_err(|e| {
            ConfigError::InvalidUrl(format!(
                "Invalid url for category '{}': {}",
                category.name, e
            ))
        })?;

        if category.max_pages == Some(0) || category.max_companies == Some(0) {
            return Err(ConfigError::Validation(format!(
                "Limits for category '{}' must be >= 1",
                category.name
            )));
        }
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation("csv-path cannot be empty".to_string()));
    }

    if config.json_path.is_empty() {
        return Err(ConfigError::Validation("json-path cannot be empty".to_string()));
    }

    Ok(())
}
