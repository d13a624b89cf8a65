//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock directory sites and test
//! pagination, extraction and category crawls end-to-end.

use company_crawler::config::{DEFAULT_ACCEPT_LANGUAGE, DEFAULT_USER_AGENT};
use company_crawler::crawler::{
    build_http_client, Crawler, DetailExtractor, Fetcher, FetcherConfig, RegistrationCodeRule,
};
use company_crawler::model::{CategoryRef, CompanyRecord, CrawlConfig};
use std::time::{Duration, Instant};
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a crawler for the mock server with no pacing delay
fn create_test_crawler(mock_server: &MockServer) -> Crawler {
    let config = FetcherConfig {
        request_delay: Duration::ZERO,
        request_timeout: Duration::from_secs(5),
        ..FetcherConfig::default()
    };
    let fetcher = Fetcher::new(&config).expect("Failed to build fetcher");
    let base_url = Url::parse(&mock_server.uri()).expect("Failed to parse base URL");
    Crawler::new(fetcher, base_url)
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

fn listing_page(hrefs: &[&str]) -> String {
    let links: String = hrefs
        .iter()
        .map(|href| format!(r#"<li><a href="{}">Įmonė</a></li>"#, href))
        .collect();
    format!(
        r#"<html><body><ul>{}</ul><a href="/imones/kita/">Kita kategorija</a></body></html>"#,
        links
    )
}

fn detail_page(name: &str, code: &str) -> String {
    format!(
        r#"<html><body>
        <h1>{}</h1>
        <table>
          <tr><td>Įmonės kodas: {}</td></tr>
          <tr><td>Adresas: Gedimino pr. 1, Vilnius</td></tr>
        </table>
        <a href="tel:+37060000000">+370 600 00000</a>
        <a href="mailto:info@imone.lt">info@imone.lt</a>
        <a href="https://www.imone.lt">www.imone.lt</a>
        </body></html>"#,
        name, code
    )
}

async fn mount_listing(mock_server: &MockServer, listing_path: &str, page: u32, body: String) {
    Mock::given(method("GET"))
        .and(path(listing_path))
        .and(query_param("page", page.to_string()))
        .respond_with(html(body))
        .mount(mock_server)
        .await;
}

async fn mount_detail(mock_server: &MockServer, detail_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(detail_path))
        .respond_with(html(body))
        .mount(mock_server)
        .await;
}

/// Mounts a page that must never be requested
async fn mount_untouched(mock_server: &MockServer, page_path: &str, page: Option<u32>) {
    let mut mock = Mock::given(method("GET")).and(path(page_path));
    if let Some(page) = page {
        mock = mock.and(query_param("page", page.to_string()));
    }
    mock.respond_with(html(listing_page(&["/imone/never/"])))
        .expect(0)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_category_crawl_end_to_end() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_listing(
        &mock_server,
        "/imones/test/",
        1,
        listing_page(&["/imone/alfa/", "/imone/beta/"]),
    )
    .await;
    // Page 2 exists but lies beyond max_pages
    mount_untouched(&mock_server, "/imones/test/", Some(2)).await;
    mount_detail(&mock_server, "/imone/alfa/", detail_page("UAB Alfa", "111111111")).await;
    mount_detail(&mock_server, "/imone/beta/", detail_page("UAB Beta", "222222222")).await;

    let crawler = create_test_crawler(&mock_server);
    let config = CrawlConfig {
        max_pages: 1,
        max_companies: 50,
    };
    let mut results = Vec::new();

    let added = crawler
        .crawl_category(
            "Test",
            &format!("{}/imones/test/", base_url),
            &config,
            &mut results,
        )
        .await;

    assert_eq!(added.len(), 2);
    assert!(added
        .iter()
        .all(|record| record.category.as_deref() == Some("Test")));

    let alfa = &results[0];
    assert_eq!(alfa.url, format!("{}/imone/alfa/", base_url));
    assert_eq!(alfa.name.as_deref(), Some("UAB Alfa"));
    assert_eq!(alfa.registration_code.as_deref(), Some("111111111"));
    assert_eq!(alfa.address.as_deref(), Some("Gedimino pr. 1, Vilnius"));
    assert_eq!(alfa.phone.as_deref(), Some("+370 600 00000"));
    assert_eq!(alfa.email.as_deref(), Some("info@imone.lt"));
    assert_eq!(alfa.website.as_deref(), Some("https://www.imone.lt"));
    assert_eq!(alfa.employee_count, None);

    assert_eq!(results[1].name.as_deref(), Some("UAB Beta"));
}

#[tokio::test]
async fn test_shared_client_and_custom_rules() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_listing(
        &mock_server,
        "/imones/test/",
        1,
        listing_page(&["/imone/alfa/"]),
    )
    .await;
    mount_detail(&mock_server, "/imone/alfa/", detail_page("UAB Alfa", "111111111")).await;

    let client = build_http_client(&FetcherConfig::default()).expect("Failed to build client");
    let fetcher = Fetcher::with_client(client, Duration::ZERO);
    let crawler = Crawler::new(fetcher, Url::parse(&base_url).expect("Failed to parse base URL"))
        .with_extractor(DetailExtractor::new(vec![Box::new(RegistrationCodeRule)]));

    let config = CrawlConfig {
        max_pages: 1,
        max_companies: 50,
    };
    let mut results = Vec::new();
    crawler
        .crawl_category(
            "Test",
            &format!("{}/imones/test/", base_url),
            &config,
            &mut results,
        )
        .await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].registration_code.as_deref(), Some("111111111"));
    assert_eq!(results[0].name, None);
    assert_eq!(results[0].phone, None);
    assert_eq!(results[0].category.as_deref(), Some("Test"));
}

#[tokio::test]
async fn test_pagination_stops_on_fetch_failure() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_listing(
        &mock_server,
        "/imones/it/",
        1,
        listing_page(&["/imone/a/", "/imone/b/"]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/imones/it/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_untouched(&mock_server, "/imones/it/", Some(3)).await;

    let crawler = create_test_crawler(&mock_server);
    let urls = crawler
        .discover_company_urls(&format!("{}/imones/it/", base_url), 5)
        .await;

    assert_eq!(
        urls,
        vec![
            format!("{}/imone/a/", base_url),
            format!("{}/imone/b/", base_url),
        ]
    );
}

#[tokio::test]
async fn test_pagination_stops_on_empty_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_listing(&mock_server, "/imones/it/", 1, listing_page(&["/imone/a/"])).await;
    mount_listing(&mock_server, "/imones/it/", 2, listing_page(&[])).await;
    mount_untouched(&mock_server, "/imones/it/", Some(3)).await;

    let crawler = create_test_crawler(&mock_server);
    let urls = crawler
        .discover_company_urls(&format!("{}/imones/it/", base_url), 10)
        .await;

    assert_eq!(urls, vec![format!("{}/imone/a/", base_url)]);
}

#[tokio::test]
async fn test_duplicates_across_pages_kept_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_listing(
        &mock_server,
        "/imones/it/",
        1,
        listing_page(&["/imone/a/", "/imone/b/"]),
    )
    .await;
    let absolute_b = format!("{}/imone/b/", base_url);
    mount_listing(
        &mock_server,
        "/imones/it/",
        2,
        listing_page(&[absolute_b.as_str(), "/company/c/", "/imone/a/"]),
    )
    .await;

    let crawler = create_test_crawler(&mock_server);
    let urls = crawler
        .discover_company_urls(&format!("{}/imones/it/", base_url), 2)
        .await;

    assert_eq!(
        urls,
        vec![
            format!("{}/imone/a/", base_url),
            format!("{}/imone/b/", base_url),
            format!("{}/company/c/", base_url),
        ]
    );
}

#[tokio::test]
async fn test_existing_query_string_extended() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/imones/it/"))
        .and(query_param("sort", "name"))
        .and(query_param("page", "1"))
        .respond_with(html(listing_page(&["/imone/a/"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crawler = create_test_crawler(&mock_server);
    let urls = crawler
        .discover_company_urls(&format!("{}/imones/it/?sort=name", base_url), 1)
        .await;

    assert_eq!(urls.len(), 1);
}

#[tokio::test]
async fn test_company_limit_truncates_in_discovery_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_listing(
        &mock_server,
        "/imones/it/",
        1,
        listing_page(&["/imone/a/", "/imone/b/", "/imone/c/", "/imone/d/"]),
    )
    .await;
    mount_listing(&mock_server, "/imones/it/", 2, listing_page(&[])).await;
    mount_detail(&mock_server, "/imone/a/", detail_page("UAB A", "100000001")).await;
    mount_detail(&mock_server, "/imone/b/", detail_page("UAB B", "100000002")).await;
    mount_untouched(&mock_server, "/imone/c/", None).await;
    mount_untouched(&mock_server, "/imone/d/", None).await;

    let crawler = create_test_crawler(&mock_server);
    let config = CrawlConfig {
        max_pages: 3,
        max_companies: 2,
    };
    let mut results = Vec::new();
    let added = crawler
        .crawl_category("IT", &format!("{}/imones/it/", base_url), &config, &mut results)
        .await;

    let names: Vec<_> = added.iter().map(|r| r.name.as_deref()).collect();
    assert_eq!(names, vec![Some("UAB A"), Some("UAB B")]);
}

#[tokio::test]
async fn test_unfetchable_detail_is_skipped() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_listing(
        &mock_server,
        "/imones/it/",
        1,
        listing_page(&["/imone/gone/", "/imone/ok/"]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/imone/gone/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    mount_detail(&mock_server, "/imone/ok/", detail_page("UAB Ok", "123456789")).await;

    let crawler = create_test_crawler(&mock_server);
    let config = CrawlConfig {
        max_pages: 1,
        max_companies: 10,
    };
    let mut results = Vec::new();
    crawler
        .crawl_category("IT", &format!("{}/imones/it/", base_url), &config, &mut results)
        .await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, format!("{}/imone/ok/", base_url));
}

#[tokio::test]
async fn test_page_without_markers_yields_partial_record() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_listing(&mock_server, "/imones/it/", 1, listing_page(&["/imone/tuscia/"])).await;
    mount_detail(
        &mock_server,
        "/imone/tuscia/",
        "<html><body><p>Informacija ruošiama</p></body></html>".to_string(),
    )
    .await;

    let crawler = create_test_crawler(&mock_server);
    let config = CrawlConfig {
        max_pages: 1,
        max_companies: 10,
    };
    let mut results = Vec::new();
    crawler
        .crawl_category("IT", &format!("{}/imones/it/", base_url), &config, &mut results)
        .await;

    let mut expected = CompanyRecord::new(format!("{}/imone/tuscia/", base_url));
    expected.category = Some("IT".to_string());
    assert_eq!(results, vec![expected]);
}

#[tokio::test]
async fn test_results_accumulate_across_categories() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // The first category is down entirely
    Mock::given(method("GET"))
        .and(path("/imones/down/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;
    mount_listing(&mock_server, "/imones/up/", 1, listing_page(&["/imone/a/"])).await;
    mount_detail(&mock_server, "/imone/a/", detail_page("UAB A", "100000001")).await;

    let crawler = create_test_crawler(&mock_server);
    let mut down = CategoryRef::new("Down", format!("{}/imones/down/", base_url));
    down.max_pages = Some(2);
    let categories = vec![down, CategoryRef::new("Up", format!("{}/imones/up/", base_url))];
    let defaults = CrawlConfig {
        max_pages: 1,
        max_companies: 10,
    };

    let mut results = vec![CompanyRecord::new("https://earlier.run/imone/x/")];
    let summaries = crawler
        .crawl_categories(&categories, &defaults, &mut results)
        .await;

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].records_extracted, 0);
    assert_eq!(summaries[0].urls_discovered, 0);
    assert_eq!(summaries[1].records_extracted, 1);
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].category.as_deref(), Some("Up"));
}

#[tokio::test]
async fn test_discover_categories() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_detail(
        &mock_server,
        "/",
        r#"<html><body>
        <a href="/imones/statyba/">Statyba</a>
        <a href="/imones/transportas/"> Transportas </a>
        <a href="/imone/uab_x/">UAB X</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    let crawler = create_test_crawler(&mock_server);
    let categories = crawler.discover_categories().await;

    assert_eq!(
        categories,
        vec![
            CategoryRef::new("Statyba", format!("{}/imones/statyba/", base_url)),
            CategoryRef::new("Transportas", format!("{}/imones/transportas/", base_url)),
        ]
    );
}

#[tokio::test]
async fn test_discover_categories_root_down() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let crawler = create_test_crawler(&mock_server);
    assert!(crawler.discover_categories().await.is_empty());
}

#[tokio::test]
async fn test_configured_headers_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/imone/a/"))
        .and(header("user-agent", "TestBrowser/1.0"))
        .and(header("accept-language", "lt-LT"))
        .respond_with(html(detail_page("UAB A", "100000001")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = FetcherConfig {
        user_agent: "TestBrowser/1.0".to_string(),
        accept_language: "lt-LT".to_string(),
        request_delay: Duration::ZERO,
        ..FetcherConfig::default()
    };
    let fetcher = Fetcher::new(&config).expect("Failed to build fetcher");
    let base_url = Url::parse(&mock_server.uri()).expect("Failed to parse base URL");
    let crawler = Crawler::new(fetcher, base_url);

    let record = crawler
        .extract_details(&format!("{}/imone/a/", mock_server.uri()))
        .await;

    assert_eq!(record.and_then(|r| r.name), Some("UAB A".to_string()));
}

#[test]
fn test_default_headers_are_browser_like() {
    let config = FetcherConfig::default();
    assert!(config.user_agent.starts_with("Mozilla/5.0"));
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert!(config.accept_language.starts_with("lt-LT"));
    assert_eq!(config.accept_language, DEFAULT_ACCEPT_LANGUAGE);
}

#[tokio::test]
async fn test_request_pacing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html("<html></html>".to_string()))
        .mount(&mock_server)
        .await;

    let config = FetcherConfig {
        request_delay: Duration::from_millis(100),
        ..FetcherConfig::default()
    };
    let fetcher = Fetcher::new(&config).expect("Failed to build fetcher");

    let start = Instant::now();
    assert!(fetcher.fetch(&mock_server.uri()).await.is_some());
    assert!(fetcher.fetch(&mock_server.uri()).await.is_some());

    assert!(start.elapsed() >= Duration::from_millis(200));
}
