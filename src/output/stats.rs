//! Statistics over harvested records
//!
//! Counts records per category and how many carry each contact field.

use crate::crawler::CategorySummary;
use crate::model::{CompanyRecord, Field};
use chrono::{DateTime, Utc};

/// Harvest statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// When the statistics were computed
    pub generated_at: DateTime<Utc>,

    /// Total number of records
    pub total_companies: usize,

    /// Records per category, in first-seen order
    pub by_category: Vec<(String, usize)>,

    /// Records with a phone number
    pub with_phone: usize,

    /// Records with an email address
    pub with_email: usize,

    /// Records with a website
    pub with_website: usize,

    /// Records with a registration code
    pub with_registration_code: usize,
}

impl CrawlStatistics {
    /// Computes statistics from a record list
    pub fn from_records(records: &[CompanyRecord]) -> Self {
        let mut by_category: Vec<(String, usize)> = Vec::new();

        for record in records {
            let category = record.category.clone().unwrap_or_default();
            match by_category.iter_mut().find(|(name, _)| *name == category) {
                Some((_, count)) => *count += 1,
                None => by_category.push((category, 1)),
            }
        }

        let count_with = |field: Field| {
            records
                .iter()
                .filter(|record| record.get(field).is_some())
                .count()
        };

        Self {
            generated_at: Utc::now(),
            total_companies: records.len(),
            by_category,
            with_phone: count_with(Field::Phone),
            with_email: count_with(Field::Email),
            with_website: count_with(Field::Website),
            with_registration_code: count_with(Field::RegistrationCode),
        }
    }

    /// Share of records carrying a field, as a percentage
    pub fn coverage(&self, count: usize) -> f64 {
        if self.total_companies == 0 {
            return 0.0;
        }
        (count as f64 / self.total_companies as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Harvest Statistics ===\n");

    println!("Generated at: {}", stats.generated_at.to_rfc3339());
    println!("Total companies: {}", stats.total_companies);
    println!();

    println!("Companies by category:");
    for (category, count) in &stats.by_category {
        println!("  {}: {}", category, count);
    }
    println!();

    for (label, count) in [
        ("phone", stats.with_phone),
        ("email", stats.with_email),
        ("website", stats.with_website),
        ("registration code", stats.with_registration_code),
    ] {
        println!(
            "Companies with {}: {} ({:.1}%)",
            label,
            count,
            stats.coverage(count)
        );
    }
}

/// Prints one line per crawled category
pub fn print_category_summaries(summaries: &[CategorySummary]) {
    println!("=== Categories ===\n");

    for summary in summaries {
        println!(
            "  {}: {} collected ({} found, {} attempted, {} lost)",
            summary.name,
            summary.records_extracted,
            summary.urls_discovered,
            summary.urls_attempted,
            summary.lost()
        );
    }
    println!();
}
