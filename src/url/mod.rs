//! URL handling module for Company-Crawler
//!
//! This module provides site URL validation, href resolution against the
//! site root and listing page URL construction.

mod pagination;
mod resolve;

pub use pagination::page_url;
pub use resolve::resolve_href;

use crate::UrlError;
use url::Url;

/// Parses a site or category URL, accepting only HTTP(S) schemes
///
/// # Arguments
///
/// * `url_str` - The URL string to parse
///
/// # Returns
///
/// * `Ok(Url)` - Parsed URL
/// * `Err(UrlError)` - Malformed URL or unsupported scheme
///
/// # Examples
///
/// ```
/// use company_crawler::url::parse_site_url;
///
/// let url = parse_site_url("https://rekvizitai.vz.lt").unwrap();
/// assert_eq!(url.host_str(), Some("rekvizitai.vz.lt"));
/// assert!(parse_site_url("ftp://rekvizitai.vz.lt").is_err());
/// ```
pub fn parse_site_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    Ok(url)
}
