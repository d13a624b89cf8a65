//! Crawler module for directory page fetching and extraction
//!
//! This module contains the core crawl-and-extract pipeline, including:
//! - Rate-limited HTTP fetching with failure classification
//! - Category discovery from the landing page
//! - Listing pagination and detail URL collection
//! - Heuristic field extraction from detail pages
//! - Per-category crawl coordination

mod categories;
mod coordinator;
mod document;
mod extractor;
mod fetcher;
mod listing;

pub use categories::{categories_from_document, discover_categories};
pub use coordinator::{CategorySummary, Crawler};
pub use document::{element_href, element_text, Document};
pub use extractor::{
    AddressRule, DetailExtractor, EmailRule, FieldRule, NameRule, PhoneRule,
    RegistrationCodeRule, WebsiteRule,
};
pub use fetcher::{build_http_client, fetch_url, FetchResult, Fetcher, FetcherConfig};
pub use listing::{detail_urls_from_document, discover_company_urls};
