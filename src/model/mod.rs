//! Data model for Company-Crawler
//!
//! This module contains the company record produced by the detail extractor,
//! the category reference consumed by the crawler and the per-category crawl
//! limits.

mod category;
mod record;

pub use category::{CategoryRef, CrawlConfig};
pub use record::{CompanyRecord, Field};
