//! Category discovery from the directory landing page

use crate::crawler::document::{element_href, element_text, Document};
use crate::crawler::fetcher::Fetcher;
use crate::model::CategoryRef;
use crate::url::resolve_href;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Path segment identifying category listing links
fn category_href_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r"/imones/").expect("category pattern is a valid regex"))
}

/// Extracts category links from an already parsed landing page
///
/// Anchors with empty text or an href that does not resolve are skipped.
/// Order follows the document; repeated links are kept.
pub fn categories_from_document(document: &Document, root: &Url) -> Vec<CategoryRef> {
    document
        .anchors_with_href(category_href_pattern())
        .iter()
        .filter_map(|anchor| {
            let name = element_text(anchor);
            if name.is_empty() {
                return None;
            }
            let url = resolve_href(element_href(anchor)?, root)?;
            Some(CategoryRef::new(name, url))
        })
        .collect()
}

/// Fetches the site root and lists the categories it links to
///
/// Returns an empty list if the root page cannot be fetched.
pub async fn discover_categories(fetcher: &Fetcher, root: &Url) -> Vec<CategoryRef> {
    let Some(document) = fetcher.fetch(root.as_str()).await else {
        return Vec::new();
    };

    let categories = categories_from_document(&document, root);
    tracing::info!("Found {} categories on {}", categories.len(), root);
    categories
}
