/// Builds the URL of one listing page within a category
///
/// The page number is appended as a `page=N` query parameter, joined with
/// `&` when the category URL already has a query string and with `?`
/// otherwise. The category URL is not otherwise modified.
///
/// # Examples
///
/// ```
/// use company_crawler::url::page_url;
///
/// assert_eq!(page_url("https://x/y", 2), "https://x/y?page=2");
/// assert_eq!(page_url("https://x/y?z=1", 2), "https://x/y?z=1&page=2");
/// ```
pub fn page_url(category_url: &str, page: u32) -> String {
    let separator = if category_url.contains('?') { '&' } else { '?' };
    format!("{}{}page={}", category_url, separator, page)
}
