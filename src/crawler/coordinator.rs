//! Crawler coordinator - per-category crawl orchestration
//!
//! The coordinator drives one category end to end: collect detail URLs from
//! the listing pages, cap them, extract each detail page, tag the records
//! with the category name and append them to a caller-owned result list.
//! Everything runs sequentially; one request is in flight at a time.

use crate::config::Config;
use crate::crawler::categories::discover_categories;
use crate::crawler::extractor::DetailExtractor;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::listing::discover_company_urls;
use crate::model::{CategoryRef, CompanyRecord, CrawlConfig, Field};
use crate::url::parse_site_url;
use crate::CrawlError;
use url::Url;

/// Outcome of crawling one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    /// Category name
    pub name: String,

    /// Unique detail URLs found while paginating
    pub urls_discovered: usize,

    /// Detail URLs kept after applying the company limit
    pub urls_attempted: usize,

    /// Records appended to the results
    pub records_extracted: usize,
}

impl CategorySummary {
    /// Detail pages that could not be fetched
    pub fn lost(&self) -> usize {
        self.urls_attempted - self.records_extracted
    }
}

/// Main crawler structure
///
/// Owns the fetcher (and with it the HTTP session) and the detail
/// extractor. Results are never stored here; each crawl appends to the
/// list the caller passes in.
pub struct Crawler {
    fetcher: Fetcher,
    base_url: Url,
    extractor: DetailExtractor,
}

impl Crawler {
    /// Creates a crawler for the site rooted at `base_url`
    pub fn new(fetcher: Fetcher, base_url: Url) -> Self {
        Self {
            fetcher,
            base_url,
            extractor: DetailExtractor::default(),
        }
    }

    /// Creates a crawler from a loaded configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - HTTP client built and root URL valid
    /// * `Err(CrawlError)` - Invalid root URL or header values
    pub fn from_config(config: &Config) -> Result<Self, CrawlError> {
        let base_url = parse_site_url(&config.site.root_url)?;
        let fetcher = Fetcher::new(&config.fetcher_config())?;
        Ok(Self::new(fetcher, base_url))
    }

    /// Replaces the detail extractor
    pub fn with_extractor(mut self, extractor: DetailExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// The site root hrefs are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Lists the categories linked from the site root
    pub async fn discover_categories(&self) -> Vec<CategoryRef> {
        discover_categories(&self.fetcher, &self.base_url).await
    }

    /// Collects unique detail page URLs of one category
    pub async fn discover_company_urls(&self, category_url: &str, max_pages: u32) -> Vec<String> {
        discover_company_urls(&self.fetcher, &self.base_url, category_url, max_pages).await
    }

    /// Fetches one detail page and extracts a record from it
    ///
    /// Returns None only if the page cannot be fetched; a page without any
    /// recognisable field still yields a record.
    pub async fn extract_details(&self, url: &str) -> Option<CompanyRecord> {
        let document = self.fetcher.fetch(url).await?;
        Some(self.extractor.extract(url, &document))
    }

    /// Crawls one category and appends its records to `results`
    ///
    /// At most `config.max_companies` detail pages are visited, taken in
    /// discovery order. Detail pages that cannot be fetched are skipped.
    ///
    /// # Returns
    ///
    /// The records added by this call, as a slice of `results`
    pub async fn crawl_category<'r>(
        &self,
        name: &str,
        url: &str,
        config: &CrawlConfig,
        results: &'r mut Vec<CompanyRecord>,
    ) -> &'r [CompanyRecord] {
        let start = results.len();
        self.run_category(name, url, config, results).await;
        &results[start..]
    }

    /// Crawls several categories in order
    ///
    /// A category that yields nothing does not stop the batch. Per-category
    /// limits on a [`CategoryRef`] override `defaults`.
    pub async fn crawl_categories(
        &self,
        categories: &[CategoryRef],
        defaults: &CrawlConfig,
        results: &mut Vec<CompanyRecord>,
    ) -> Vec<CategorySummary> {
        let mut summaries = Vec::with_capacity(categories.len());

        for category in categories {
            let config = category.crawl_config(defaults);
            let summary = self
                .run_category(&category.name, &category.url, &config, results)
                .await;
            summaries.push(summary);
        }

        summaries
    }

    async fn run_category(
        &self,
        name: &str,
        url: &str,
        config: &CrawlConfig,
        results: &mut Vec<CompanyRecord>,
    ) -> CategorySummary {
        tracing::info!("Starting category: {}", name);

        let mut company_urls = self.discover_company_urls(url, config.max_pages).await;
        let urls_discovered = company_urls.len();
        company_urls.truncate(config.max_companies);

        tracing::info!(
            "Found {} companies in {}, extracting details",
            company_urls.len(),
            name
        );

        let start = results.len();
        let total = company_urls.len();

        for (index, company_url) in company_urls.iter().enumerate() {
            tracing::info!("  [{}/{}] {}", index + 1, total, company_url);

            match self.extract_details(company_url).await {
                Some(mut record) => {
                    record.set(Field::Category, name);
                    results.push(record);
                }
                None => tracing::debug!("Skipping {}", company_url),
            }
        }

        let records_extracted = results.len() - start;
        tracing::info!("Finished {}: {} companies collected", name, records_extracted);

        CategorySummary {
            name: name.to_string(),
            urls_discovered,
            urls_attempted: total,
            records_extracted,
        }
    }
}
