//! CSV reader for uploads.

use crate::dataset::{Dataset, Observation};
use crate::schema::{locate_columns, parse_ds, parse_number};
use crate::IngestError;

pub(crate) fn read(bytes: &[u8]) -> Result<Dataset, IngestError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::Unreadable { detail: e.to_string() })?
        .iter()
        .map(str::to_string)
        .collect();
    let cols = locate_columns(&headers)?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|e| IngestError::Unreadable { detail: e.to_string() })?;
        let row = i + 1;

        let raw_ds = record.get(cols.ds).unwrap_or("");
        let ds = parse_ds(raw_ds).ok_or_else(|| IngestError::InvalidDate {
            row,
            value: raw_ds.to_string(),
        })?;

        rows.push(Observation {
            ds,
            y_sales: parse_number(record.get(cols.y_sales).unwrap_or("")),
            y_quantity: parse_number(record.get(cols.y_quantity).unwrap_or("")),
            y_deliveries: parse_number(record.get(cols.y_deliveries).unwrap_or("")),
        });
    }

    Ok(Dataset::new(rows))
}
