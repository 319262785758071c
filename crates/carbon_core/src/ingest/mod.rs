//! Tabular input boundary.
//!
//! Converts loosely-typed CSV rows into validated `ActivityRecord`s once, so
//! the core never coerces fields dynamically.

pub mod csv_input;

pub use csv_input::{
    preview_rows, read_activity_csv, read_activity_file, CsvPreview, AMOUNT_COLUMN,
    DEFAULT_PREVIEW_ROWS, SOURCE_COLUMN,
};
