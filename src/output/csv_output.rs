use crate::model::{CompanyRecord, Field};
use crate::output::traits::{OutputResult, RecordWriter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// UTF-8 byte order mark; spreadsheet tools need it to detect the encoding
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes records as CSV to any writer
///
/// The header row lists every field name; absent fields are empty cells.
pub fn write_csv<W: Write>(records: &[CompanyRecord], writer: W) -> OutputResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(Field::ALL.iter().map(|field| field.column_name()))?;

    for record in records {
        csv_writer.write_record(
            Field::ALL
                .iter()
                .map(|field| record.get(*field).unwrap_or("")),
        )?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// CSV file writer
pub struct CsvWriter {
    path: PathBuf,
}

impl CsvWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordWriter for CsvWriter {
    fn format_name(&self) -> &'static str {
        "CSV"
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
        file.write_all(UTF8_BOM)?;
        write_csv(records, &mut file)?;
        file.flush()?;

        tracing::info!("Saved {} records to {}", records.len(), self.path.display());
        Ok(true)
    }
}
