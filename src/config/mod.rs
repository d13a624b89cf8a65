//! Configuration module for Company-Crawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use company_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Crawling {} categories", config.categories.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, HeaderConfig, OutputConfig, SiteConfig, DEFAULT_ACCEPT, DEFAULT_ACCEPT_LANGUAGE,
    DEFAULT_ROOT_URL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::{validate, validate_crawl_limits};

use crate::crawler::FetcherConfig;
use std::time::Duration;

impl Config {
    /// Builds the fetcher settings described by this configuration
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            user_agent: self.headers.user_agent.clone(),
            accept: self.headers.accept.clone(),
            accept_language: self.headers.accept_language.clone(),
            request_delay: Duration::from_millis(self.site.request_delay_ms),
            request_timeout: Duration::from_secs(self.site.request_timeout_secs),
        }
    }
}
