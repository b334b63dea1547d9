//! Required-column layout and cell-level parsing shared by both readers.

use chrono::NaiveDate;

use demandcast_core::Metric;

use crate::IngestError;

/// Columns every upload must carry, in reporting order: the date column plus
/// one history column per metric.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "ds",
    Metric::Sales.column(),
    Metric::Quantity.column(),
    Metric::Deliveries.column(),
];

/// Resolved positions of the required columns in a header row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnIndex {
    pub ds: usize,
    pub y_sales: usize,
    pub y_quantity: usize,
    pub y_deliveries: usize,
}

/// Locate every required column, collecting all absences into one error
/// rather than failing on the first.
pub(crate) fn locate_columns(headers: &[String]) -> Result<ColumnIndex, IngestError> {
    let find = |name: &str| headers.iter().position(|h| h == name);

    let mut missing = Vec::new();
    for name in REQUIRED_COLUMNS {
        if find(name).is_none() {
            missing.push(name.to_string());
        }
    }
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns { missing });
    }

    Ok(ColumnIndex {
        ds: find("ds").unwrap_or_default(),
        y_sales: find(Metric::Sales.column()).unwrap_or_default(),
        y_quantity: find(Metric::Quantity.column()).unwrap_or_default(),
        y_deliveries: find(Metric::Deliveries.column()).unwrap_or_default(),
    })
}

const DS_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a `ds` cell. ISO dates first, then the common fallback formats,
/// then a date prefix of a timestamp ("2024-06-30 00:00:00").
pub(crate) fn parse_ds(value: &str) -> Option<NaiveDate> {
    let v = value.trim();
    for fmt in DS_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(v, fmt) {
            return Some(d);
        }
    }
    v.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Metric cells parse leniently: anything non-numeric becomes NaN. Presence
/// of the column is the contract; prediction never reads these values.
pub(crate) fn parse_number(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn locates_columns_in_any_order_with_extras() {
        let cols = locate_columns(&headers(&[
            "region",
            "y_deliveries",
            "ds",
            "y_quantity",
            "y_sales",
            "notes",
        ]))
        .unwrap();

        assert_eq!(cols.ds, 2);
        assert_eq!(cols.y_sales, 4);
        assert_eq!(cols.y_quantity, 3);
        assert_eq!(cols.y_deliveries, 1);
    }

    #[test]
    fn reports_all_missing_columns_at_once() {
        let err = locate_columns(&headers(&["ds", "y_sales"])).unwrap_err();
        match err {
            IngestError::MissingColumns { missing } => {
                assert_eq!(missing, vec!["y_quantity", "y_deliveries"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn ds_accepts_iso_and_fallback_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(parse_ds("2024-07-01"), Some(expected));
        assert_eq!(parse_ds("2024/07/01"), Some(expected));
        assert_eq!(parse_ds("07/01/2024"), Some(expected));
        assert_eq!(parse_ds(" 2024-07-01 "), Some(expected));
        assert_eq!(parse_ds("2024-07-01 00:00:00"), Some(expected));
    }

    #[test]
    fn ds_rejects_non_dates() {
        assert_eq!(parse_ds("yesterday"), None);
        assert_eq!(parse_ds(""), None);
        assert_eq!(parse_ds("2024-13-01"), None);
    }

    #[test]
    fn numbers_parse_leniently() {
        assert_eq!(parse_number("12.5"), 12.5);
        assert_eq!(parse_number(" 3 "), 3.0);
        assert!(parse_number("n/a").is_nan());
        assert!(parse_number("").is_nan());
    }
}
