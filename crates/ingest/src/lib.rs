//! `demandcast-ingest`
//!
//! **Responsibility:** turn uploaded bytes into a validated [`Dataset`].
//!
//! Pure transformation: no I/O beyond the bytes handed in, no side effects.
//! The parser is chosen by filename suffix; validation checks the required
//! history columns and that every `ds` value is a real date. Uploaded values
//! are validated for presence only; prediction never reads them.

use thiserror::Error;

pub mod dataset;
mod delimited;
mod schema;
mod workbook;

pub use dataset::{Dataset, Observation};
pub use schema::REQUIRED_COLUMNS;

/// Upload validation/parse failure.
///
/// The `Display` strings of the first five variants are the exact messages
/// the HTTP layer returns with a 400; `Unreadable` is internal detail and
/// only ever logged.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("No file part in the request")]
    MissingFilePart,

    #[error("No selected file")]
    EmptySelection,

    #[error("Unsupported file type. Please upload a CSV or Excel file.")]
    UnsupportedFileType,

    #[error("Input data must contain all required columns: ds, y_sales, y_quantity, y_deliveries")]
    MissingColumns { missing: Vec<String> },

    #[error("Could not parse 'ds' value '{value}' on row {row} as a date")]
    InvalidDate { row: usize, value: String },

    #[error("unreadable upload: {detail}")]
    Unreadable { detail: String },
}

/// Parse an uploaded file into a validated dataset.
///
/// `.csv` goes through the delimited-text reader, `.xls`/`.xlsx` through the
/// workbook reader; any other suffix is rejected without touching the bytes.
pub fn parse_dataset(filename: &str, bytes: &[u8]) -> Result<Dataset, IngestError> {
    if filename.trim().is_empty() {
        return Err(IngestError::EmptySelection);
    }

    if filename.ends_with(".csv") {
        delimited::read(bytes)
    } else if filename.ends_with(".xls") || filename.ends_with(".xlsx") {
        workbook::read(bytes)
    } else {
        Err(IngestError::UnsupportedFileType)
    }
}
