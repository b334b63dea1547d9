//! Excel reader for uploads (`.xls` and `.xlsx`).
//!
//! Reads the first sheet; the first row is the header. Date cells are taken
//! natively where the workbook stores real dates, with a string fallback for
//! sheets that keep `ds` as text.

use std::io::Cursor;

use calamine::{Data, DataType, Reader, open_workbook_auto_from_rs};
use chrono::NaiveDate;

use crate::dataset::{Dataset, Observation};
use crate::schema::{locate_columns, parse_ds, parse_number};
use crate::IngestError;

pub(crate) fn read(bytes: &[u8]) -> Result<Dataset, IngestError> {
    let mut sheets = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| IngestError::Unreadable { detail: e.to_string() })?;

    let sheet = sheets
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::Unreadable {
            detail: "workbook has no sheets".to_string(),
        })?;
    let range = sheets
        .worksheet_range(&sheet)
        .map_err(|e| IngestError::Unreadable { detail: e.to_string() })?;

    let mut cell_rows = range.rows();
    let headers: Vec<String> = cell_rows
        .next()
        .map(|cells| cells.iter().map(ToString::to_string).collect())
        .unwrap_or_default();
    let cols = locate_columns(&headers)?;

    let mut rows = Vec::new();
    for (i, cells) in cell_rows.enumerate() {
        let row = i + 1;

        let ds_cell = cells.get(cols.ds);
        let ds = ds_cell
            .and_then(cell_date)
            .ok_or_else(|| IngestError::InvalidDate {
                row,
                value: ds_cell.map(ToString::to_string).unwrap_or_default(),
            })?;

        rows.push(Observation {
            ds,
            y_sales: cell_number(cells.get(cols.y_sales)),
            y_quantity: cell_number(cells.get(cols.y_quantity)),
            y_deliveries: cell_number(cells.get(cols.y_deliveries)),
        });
    }

    Ok(Dataset::new(rows))
}

fn cell_date(cell: &Data) -> Option<NaiveDate> {
    cell.as_date().or_else(|| parse_ds(&cell.to_string()))
}

fn cell_number(cell: Option<&Data>) -> f64 {
    cell.and_then(|c| {
        c.get_float()
            .or_else(|| c.get_int().map(|i| i as f64))
            .or_else(|| c.to_string().trim().parse().ok())
    })
    .unwrap_or(f64::NAN)
}
