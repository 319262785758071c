//! CSV activity reader.
//!
//! # Responsibility
//! - Locate the required `Source` and `Amount` columns by exact header name.
//! - Parse every data row into an `ActivityRecord`, failing on the first bad row.
//!
//! # Invariants
//! - Extra columns are ignored; row order is preserved but carries no meaning.
//! - Row numbers in errors are 1-based data rows (the header is not counted).

use crate::model::activity::{ActivityRecord, DataFormatError};
use csv::{ReaderBuilder, StringRecord};
use log::{error, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

/// Header of the category column.
pub const SOURCE_COLUMN: &str = "Source";
/// Header of the quantity column.
pub const AMOUNT_COLUMN: &str = "Amount";
/// Rows shown by UI previews when no limit is given.
pub const DEFAULT_PREVIEW_ROWS: usize = 15;

/// Reads all activity records from CSV text.
///
/// # Errors
/// - `MissingColumn` when `Source` or `Amount` is absent from the header.
/// - Row-level variants for empty categories and missing/invalid/non-finite amounts.
/// - `Unreadable` when the CSV cannot be tokenized.
pub fn read_activity_csv<R: Read>(reader: R) -> Result<Vec<ActivityRecord>, DataFormatError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(unreadable)?.clone();
    let source_index = column_index(&headers, SOURCE_COLUMN)?;
    let amount_index = column_index(&headers, AMOUNT_COLUMN)?;

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row_number = index + 1;
        let row = row.map_err(unreadable)?;
        let category = row.get(source_index).unwrap_or_default();
        let quantity = parse_quantity(row.get(amount_index), row_number)?;
        let record = ActivityRecord::new(category, quantity);
        record.validate(row_number)?;
        records.push(record);
    }
    Ok(records)
}

/// Reads activity records from a CSV file on disk.
///
/// # Side effects
/// - Emits `csv_read` logging events with row count and duration.
pub fn read_activity_file(path: impl AsRef<Path>) -> Result<Vec<ActivityRecord>, DataFormatError> {
    let started_at = Instant::now();
    let result = File::open(path.as_ref())
        .map_err(unreadable)
        .and_then(read_activity_csv);

    match &result {
        Ok(records) => info!(
            "event=csv_read module=ingest status=ok rows={} duration_ms={}",
            records.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=csv_read module=ingest status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

/// Raw header and first rows of a CSV file, for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Returns the header and up to `limit` raw rows without validating them.
pub fn preview_rows<R: Read>(reader: R, limit: usize) -> Result<CsvPreview, DataFormatError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(unreadable)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for row in csv_reader.records().take(limit) {
        let row = row.map_err(unreadable)?;
        rows.push(row.iter().map(str::to_string).collect());
    }
    Ok(CsvPreview { headers, rows })
}

fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize, DataFormatError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(DataFormatError::MissingColumn(name))
}

fn parse_quantity(raw: Option<&str>, row: usize) -> Result<f64, DataFormatError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(DataFormatError::MissingQuantity { row });
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| DataFormatError::InvalidQuantity {
            row,
            value: trimmed.to_string(),
        })?;
    if !value.is_finite() {
        return Err(DataFormatError::NonFiniteQuantity { row });
    }
    Ok(value)
}

fn unreadable(err: impl std::fmt::Display) -> DataFormatError {
    DataFormatError::Unreadable(err.to_string())
}
