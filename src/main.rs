//! Company-Crawler main entry point
//!
//! This is the command-line interface for the Company-Crawler directory
//! harvester.

use clap::Parser;
use company_crawler::config::{load_config_with_hash, validate_crawl_limits, Config};
use company_crawler::output::{
    print_category_summaries, print_statistics, write_all, CrawlStatistics, CsvWriter, JsonWriter,
    RecordWriter,
};
use company_crawler::url::parse_site_url;
use company_crawler::{CategoryRef, Crawler};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Category crawled when none is configured
const DEFAULT_CATEGORY_NAME: &str = "IT ir programinė įranga";
const DEFAULT_CATEGORY_PATH: &str = "/imones/kompiuteriai-ir-programine-iranga/";

/// Company-Crawler: a business-directory harvester
///
/// Paginates through directory categories, visits each company's detail
/// page and writes the extracted records to CSV and JSON.
#[derive(Parser, Debug)]
#[command(name = "company-crawler")]
#[command(version = "1.0.0")]
#[command(about = "A business-directory harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Category to crawl, may be repeated
    #[arg(long = "category", value_name = "NAME=URL", value_parser = parse_category)]
    categories: Vec<CategoryRef>,

    /// Also crawl the first N categories found on the site root
    #[arg(long, value_name = "N")]
    discover: Option<usize>,

    /// Print the categories found on the site root and exit
    #[arg(long, conflicts_with_all = ["discover", "categories"])]
    list_categories: bool,

    /// Listing pages to paginate per category
    #[arg(long, value_name = "N")]
    max_pages: Option<u32>,

    /// Companies to extract per category
    #[arg(long, value_name = "N")]
    max_companies: Option<usize>,

    /// Pause before each request, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// CSV output path
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// JSON output path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Parses a `NAME=URL` category argument
fn parse_category(value: &str) -> Result<CategoryRef, String> {
    let (name, url) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=URL, got '{}'", value))?;

    let name = name.trim();
    if name.is_empty() {
        return Err("category name cannot be empty".to_string());
    }

    let url = parse_site_url(url).map_err(|e| e.to_string())?;
    Ok(CategoryRef::new(name, url.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    apply_overrides(&mut config, &cli)?;

    let crawler = Crawler::from_config(&config)?;

    if cli.list_categories {
        handle_list_categories(&crawler).await;
        return Ok(());
    }

    handle_crawl(&crawler, &config, &cli).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("company_crawler=info,warn"),
            1 => EnvFilter::new("company_crawler=debug,info"),
            2 => EnvFilter::new("company_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Folds command-line options into the loaded configuration
fn apply_overrides(config: &mut Config, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(max_pages) = cli.max_pages {
        config.crawl.max_pages = max_pages;
    }
    if let Some(max_companies) = cli.max_companies {
        config.crawl.max_companies = max_companies;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.site.request_delay_ms = delay_ms;
    }
    if let Some(csv) = &cli.csv {
        config.output.csv_path = csv.display().to_string();
    }
    if let Some(json) = &cli.json {
        config.output.json_path = json.display().to_string();
    }

    validate_crawl_limits(&config.crawl)?;
    config.categories.extend(cli.categories.iter().cloned());
    Ok(())
}

/// Handles --list-categories: prints what the site root links to
async fn handle_list_categories(crawler: &Crawler) {
    let categories = crawler.discover_categories().await;

    println!("Categories on {} ({}):", crawler.base_url(), categories.len());
    for category in &categories {
        println!("  - {} ({})", category.name, category.url);
    }
}

/// Handles the main crawl operation
async fn handle_crawl(
    crawler: &Crawler,
    config: &Config,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut categories = config.categories.clone();

    if let Some(limit) = cli.discover {
        tracing::info!("Discovering categories on {}", crawler.base_url());
        let discovered = crawler.discover_categories().await;
        tracing::info!("Found {} categories, crawling up to {}", discovered.len(), limit);
        categories.extend(discovered.into_iter().take(limit));
    }

    if categories.is_empty() {
        let url = crawler.base_url().join(DEFAULT_CATEGORY_PATH)?;
        categories.push(CategoryRef::new(DEFAULT_CATEGORY_NAME, url.to_string()));
    }

    tracing::info!(
        "Crawling {} categories (max pages: {}, max companies: {})",
        categories.len(),
        config.crawl.max_pages,
        config.crawl.max_companies
    );

    let mut results = Vec::new();
    let summaries = crawler
        .crawl_categories(&categories, &config.crawl, &mut results)
        .await;

    print_category_summaries(&summaries);

    let csv = CsvWriter::new(&config.output.csv_path);
    let json = JsonWriter::new(&config.output.json_path);
    if let Err(e) = write_all(&[&csv as &dyn RecordWriter, &json], &results) {
        tracing::error!("Failed to save results: {}", e);
        return Err(e.into());
    }

    if !results.is_empty() {
        print_statistics(&CrawlStatistics::from_records(&results));
    }

    Ok(())
}
