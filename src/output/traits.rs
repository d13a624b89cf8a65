//! Output writer traits and error types
//!
//! Writers consume the crawler's result list as a plain sequence of
//! records; nothing here feeds back into crawling.

use crate::model::CompanyRecord;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for record writers
pub trait RecordWriter {
    /// Short format name used in log lines
    fn format_name(&self) -> &'static str;

    /// Destination description (usually a path)
    fn destination(&self) -> String;

    /// Writes all records
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Records written
    /// * `Ok(false)` - Nothing to write; the destination was left untouched
    /// * `Err(OutputError)` - Writing failed
    fn write_records(&self, records: &[CompanyRecord]) -> OutputResult<bool>;
}
