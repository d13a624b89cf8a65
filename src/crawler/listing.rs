//! Listing page pagination and detail URL collection

use crate::crawler::document::{element_href, Document};
use crate::crawler::fetcher::Fetcher;
use crate::url::{page_url, resolve_href};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use url::Url;

/// Path markers of company detail pages; sites vary the naming
fn detail_href_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r"/imone/|/company/").expect("detail pattern is a valid regex"))
}

/// Returns the resolved detail page URLs linked from a listing page
///
/// The list is in document order and may contain repeats. Returns None if
/// the page has no detail anchors at all, which marks the end of the
/// category.
pub fn detail_urls_from_document(document: &Document, base: &Url) -> Option<Vec<String>> {
    let anchors = document.anchors_with_href(detail_href_pattern());
    if anchors.is_empty() {
        return None;
    }

    Some(
        anchors
            .iter()
            .filter_map(|anchor| resolve_href(element_href(anchor)?, base))
            .collect(),
    )
}

/// Paginates through a category and collects unique detail page URLs
///
/// Pages 1..=`max_pages` are requested in order. Pagination stops early,
/// keeping what was collected, when a page cannot be fetched or when a page
/// contains no detail links. URLs are deduplicated after resolution against
/// `base`, preserving first-seen order.
pub async fn discover_company_urls(
    fetcher: &Fetcher,
    base: &Url,
    category_url: &str,
    max_pages: u32,
) -> Vec<String> {
    let mut company_urls = Vec::new();
    let mut seen = HashSet::new();

    for page in 1..=max_pages {
        let url = page_url(category_url, page);

        let Some(document) = fetcher.fetch(&url).await else {
            tracing::debug!("Stopping pagination of {} at page {}", category_url, page);
            break;
        };

        let Some(found) = detail_urls_from_document(&document, base) else {
            tracing::debug!("No company links on {}, end of listing", url);
            break;
        };

        for company_url in found {
            if seen.insert(company_url.clone()) {
                company_urls.push(company_url);
            }
        }

        tracing::info!(
            "Collected {} company URLs from {} pages",
            company_urls.len(),
            page
        );
    }

    company_urls
}
