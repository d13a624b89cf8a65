use url::Url;

/// Resolves an anchor href against the site root
///
/// Returns None if the href is empty, cannot be joined onto `base`, or
/// resolves to anything other than an HTTP(S) URL.
///
/// # Examples
///
/// ```
/// use company_crawler::url::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://rekvizitai.vz.lt").unwrap();
/// assert_eq!(
///     resolve_href("/imone/uab_pavyzdys/", &base),
///     Some("https://rekvizitai.vz.lt/imone/uab_pavyzdys/".to_string())
/// );
/// ```
pub fn resolve_href(href: &str, base: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    match base.join(href) {
        Ok(absolute) if absolute.scheme() == "http" || absolute.scheme() == "https" => {
            Some(absolute.to_string())
        }
        _ => None,
    }
}
