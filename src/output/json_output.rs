use crate::model::CompanyRecord;
use crate::output::traits::{OutputResult, RecordWriter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Writes records as a pretty-printed JSON array; absent fields are `null`
pub fn write_json<W: Write>(records: &[CompanyRecord], writer: W) -> OutputResult<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// JSON file writer
pub struct JsonWriter {
    path: PathBuf,
}

impl JsonWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordWriter for JsonWriter {
    fn format_name(&self) -> &'static str {
        "JSON"
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }

    fn write_records(&self, records: &[CompanyRecord]) -> OutputResult<bool> {
        if records.is_empty() {
            tracing::warn!("No data to save to {}", self.path.display());
            return Ok(false);
        }

        let mut file = BufWriter::new(File::create(&self.path)?);
        write_json(records, &mut file)?;
        file.flush()?;

        tracing::info!("Saved {} records to {}", records.len(), self.path.display());
        Ok(true)
    }
}
