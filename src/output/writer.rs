//! CSV record output
//!
//! This module writes harvested records to a CSV file with the fixed
//! column header `Text,Author,Tags`. Field quoting and escaping of
//! embedded commas, quote characters, and newlines is delegated to the
//! `csv` crate.

use crate::record::Quote;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Column header row, in output order
const HEADER: [&str; 3] = ["Text", "Author", "Tags"];

/// Writes records to a CSV file at the given path
///
/// The file is created (or truncated) and always begins with the header
/// row, even when there are no records.
///
/// # Arguments
///
/// * `quotes` - The records to write, already in output order
/// * `output_path` - Path where the CSV file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the CSV file
/// * `Err(OutputError)` - The file could not be created or written
pub fn write_csv(quotes: &[Quote], output_path: &Path) -> OutputResult<()> {
    let file = File::create(output_path)?;
    write_csv_to(quotes, file)
}

/// Writes records as CSV to any writer
///
/// One row per record, in slice order: the record text, the author name,
/// and the tags joined into a single field.
///
/// # Arguments
///
/// * `quotes` - The records to write, already in output order
/// * `writer` - Destination for the CSV bytes
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote and flushed all rows
/// * `Err(OutputError)` - A row could not be encoded or written
pub fn write_csv_to<W: Write>(quotes: &[Quote], writer: W) -> OutputResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for quote in quotes {
        csv_writer.write_record([&quote.text, &quote.author, &quote.tags_joined()])?;
    }
    csv_writer.flush()?;

    Ok(())
}
