//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with a browser-like header set
//! - Pacing: a fixed pause before every request
//! - GET requests with a per-request timeout
//! - Error classification
//!
//! Nothing is retried. A failed fetch is logged and reported as "no
//! document"; callers skip the page and carry on.

use crate::crawler::document::Document;
use crate::config::{DEFAULT_ACCEPT, DEFAULT_ACCEPT_LANGUAGE, DEFAULT_USER_AGENT};
use crate::CrawlError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Settings for the fetcher's HTTP session
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// User-Agent header value
    pub user_agent: String,

    /// Accept header value
    pub accept: String,

    /// Accept-Language header value
    pub accept_language: String,

    /// Pause before every request
    pub request_delay: Duration,

    /// Whole-request timeout
    pub request_timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            request_delay: Duration::from_secs(1),
            request_timeout: Duration::from_secs(15),
        }
    }
}

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-2xx status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, unreadable body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Human-readable description of a failure
    pub fn describe(&self) -> String {
        match self {
            FetchResult::Success { status_code, .. } => format!("HTTP {}", status_code),
            FetchResult::HttpError { status_code } => format!("HTTP status {}", status_code),
            FetchResult::NetworkError { error } => error.clone(),
        }
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, CrawlError> {
    HeaderValue::from_str(value).map_err(|_| CrawlError::InvalidHeader {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// Builds an HTTP client with the browser-like header set
///
/// The client keeps cookies between requests and reuses connections.
/// Accept-Encoding is negotiated by reqwest for the codecs it can decode.
///
/// # Example
///
/// ```no_run
/// use company_crawler::crawler::{build_http_client, FetcherConfig};
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, CrawlError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, header_value("User-Agent", &config.user_agent)?);
    headers.insert(ACCEPT, header_value("Accept", &config.accept)?);
    headers.insert(
        ACCEPT_LANGUAGE,
        header_value("Accept-Language", &config.accept_language)?,
    );
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

    let client = Client::builder()
        .default_headers(headers)
        .timeout(config.request_timeout)
        .connect_timeout(config.request_timeout.min(Duration::from_secs(10)))
        .cookie_store(true)
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Issues a single GET and classifies the outcome
///
/// # Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with readable body | Success |
/// | Any other status | HttpError |
/// | Timeout | NetworkError ("Request timeout") |
/// | Connection failure | NetworkError ("Connection failed: ...") |
/// | Body read failure | NetworkError |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: format!("Failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: format!("Connection failed: {}", e),
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Rate-limited page retrieval over one owned HTTP session
///
/// Every call sleeps for the configured delay before issuing the request,
/// whether or not the previous request went to the same host.
pub struct Fetcher {
    client: Client,
    request_delay: Duration,
}

impl Fetcher {
    /// Creates a fetcher with its own HTTP client
    pub fn new(config: &FetcherConfig) -> Result<Self, CrawlError> {
        Ok(Self {
            client: build_http_client(config)?,
            request_delay: config.request_delay,
        })
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client, request_delay: Duration) -> Self {
        Self {
            client,
            request_delay,
        }
    }

    /// Returns the pause applied before each request
    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    /// Fetches `url` and parses the body
    ///
    /// Returns None on any failure after logging it; the caller decides
    /// whether that means skipping one page or ending a pagination run.
    pub async fn fetch(&self, url: &str) -> Option<Document> {
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }

        match fetch_url(&self.client, url).await {
            FetchResult::Success {
                final_url,
                status_code,
                body,
            } => {
                tracing::debug!(
                    "Fetched {} (HTTP {}, {} bytes, final url {})",
                    url,
                    status_code,
                    body.len(),
                    final_url
                );
                Some(Document::parse(&body))
            }
            failure => {
                tracing::warn!("Failed to fetch {}: {}", url, failure.describe());
                None
            }
        }
    }
}
