//! Output module for exporting harvested records
//!
//! This module handles:
//! - CSV export with a header row of every field name
//! - JSON export preserving the same field set
//! - Harvest statistics

mod csv_output;
mod json_output;
pub mod stats;
mod traits;

pub use csv_output::{write_csv, CsvWriter};
pub use json_output::{write_json, JsonWriter};
pub use stats::{print_category_summaries, print_statistics, CrawlStatistics};
pub use traits::{OutputError, OutputResult, RecordWriter};

use crate::model::CompanyRecord;

/// Runs every writer over the records
///
/// Stops at the first failing writer.
///
/// # Returns
///
/// * `Ok(usize)` - Number of writers that produced output
/// * `Err(OutputError)` - A writer failed
pub fn write_all(writers: &[&dyn RecordWriter], records: &[CompanyRecord]) -> OutputResult<usize> {
    let mut written = 0;

    for writer in writers {
        if writer.write_records(records)? {
            tracing::debug!("{} written to {}", writer.format_name(), writer.destination());
            written += 1;
        }
    }

    Ok(written)
}
