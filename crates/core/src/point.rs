use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single forecasted value for one future day.
///
/// `ds` serializes as `YYYY-MM-DD`; the bounds bracket `yhat` at the
/// producing model's configured confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub ds: NaiveDate,
    pub yhat: f64,
    pub yhat_lower: f64,
    pub yhat_upper: f64,
}

impl ForecastPoint {
    /// The bounds are ordered around the point estimate.
    pub fn is_ordered(&self) -> bool {
        self.yhat_lower <= self.yhat && self.yhat <= self.yhat_upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ds_serializes_as_iso_day() {
        let p = ForecastPoint {
            ds: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            yhat: 10.0,
            yhat_lower: 8.0,
            yhat_upper: 12.0,
        };
        let v = serde_json::to_value(p).unwrap();
        assert_eq!(v["ds"], "2024-07-01");
    }

    #[test]
    fn round_trips_through_json() {
        let p = ForecastPoint {
            ds: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            yhat: 1.5,
            yhat_lower: 0.5,
            yhat_upper: 2.5,
        };
        let back: ForecastPoint = serde_json::from_value(serde_json::to_value(p).unwrap()).unwrap();
        assert_eq!(back, p);
        assert!(back.is_ordered());
    }
}
