use serde::{Deserialize, Serialize};

/// A crawlable category: display name plus listing URL
///
/// Produced by the category discoverer or supplied directly by a caller.
/// The optional limits override the batch defaults for this category only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category display name, copied into each record's `kategorija`
    pub name: String,

    /// Absolute URL of the first listing page
    pub url: String,

    /// Per-category override for the number of listing pages
    #[serde(rename = "max-pages", default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,

    /// Per-category override for the number of companies extracted
    #[serde(
        rename = "max-companies",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_companies: Option<usize>,
}

impl CategoryRef {
    /// Creates a category reference without limit overrides
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            max_pages: None,
            max_companies: None,
        }
    }

    /// Returns the effective crawl limits for this category
    pub fn crawl_config(&self, defaults: &CrawlConfig) -> CrawlConfig {
        CrawlConfig {
            max_pages: self.max_pages.unwrap_or(defaults.max_pages),
            max_companies: self.max_companies.unwrap_or(defaults.max_companies),
        }
    }
}

/// Limits for crawling one category
///
/// Zero is accepted here and simply means "nothing to do"; the config file
/// and CLI reject it before it reaches the crawler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Maximum listing pages to paginate through
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Maximum company detail pages to extract
    #[serde(rename = "max-companies")]
    pub max_companies: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_pages: 3,
            max_companies: 50,
        }
    }
}
