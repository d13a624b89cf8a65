use crate::model::{CategoryRef, CrawlConfig};
use serde::Deserialize;

/// Default directory root
pub const DEFAULT_ROOT_URL: &str = "https://rekvizitai.vz.lt";

/// Browser-like User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Accept header sent with every request
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Accept-Language header sent with every request
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "lt-LT,lt;q=0.9,en-US;q=0.8,en;q=0.7";

/// Main configuration structure for Company-Crawler
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub headers: HeaderConfig,
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryRef>,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Directory root; hrefs are resolved against it
    #[serde(rename = "root-url", default = "default_root_url")]
    pub root_url: String,

    /// Pause before every request (milliseconds)
    #[serde(rename = "request-delay-ms", default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_url: default_root_url(),
            request_delay_ms: default_request_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Request header configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderConfig {
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_accept")]
    pub accept: String,

    #[serde(rename = "accept-language", default = "default_accept_language")]
    pub accept_language: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            accept: default_accept(),
            accept_language: default_accept_language(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV export
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: String,

    /// Path to the JSON export
    #[serde(rename = "json-path", default = "default_json_path")]
    pub json_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            json_path: default_json_path(),
        }
    }
}

fn default_root_url() -> String {
    DEFAULT_ROOT_URL.to_string()
}

fn default_request_delay_ms() -> u64 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_accept() -> String {
    DEFAULT_ACCEPT.to_string()
}

fn default_accept_language() -> String {
    DEFAULT_ACCEPT_LANGUAGE.to_string()
}

fn default_csv_path() -> String {
    "imones_duomenys.csv".to_string()
}

fn default_json_path() -> String {
    "imones_duomenys.json".to_string()
}
