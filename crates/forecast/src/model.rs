use chrono::{Days, NaiveDate};
use thiserror::Error;

use demandcast_core::ForecastPoint;

/// Inference failure for a single model run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PredictError {
    /// The model produced a NaN or infinite estimate for a date.
    #[error("model produced a non-finite value for {date}")]
    NonFinite { date: NaiveDate },
}

/// Capability interface for a pre-trained forecasting model.
///
/// Implementations own their training history; prediction needs only a
/// future time index, never fresh observations.
pub trait ForecastModel: Send + Sync {
    /// Last date covered by the model's training history.
    fn history_end(&self) -> NaiveDate;

    /// Consecutive future dates, ascending, strictly after [`history_end`].
    ///
    /// Returns exactly `horizon_days` entries (dates past the supported
    /// calendar range are dropped, which cannot happen for sane artifacts).
    ///
    /// [`history_end`]: ForecastModel::history_end
    fn future_index(&self, horizon_days: u32) -> Vec<NaiveDate> {
        let start = self.history_end();
        (1..=u64::from(horizon_days))
            .filter_map(|offset| start.checked_add_days(Days::new(offset)))
            .collect()
    }

    /// Point estimates with bounds for every date in `index`, in input order.
    fn predict(&self, index: &[NaiveDate]) -> Result<Vec<ForecastPoint>, PredictError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEnd(NaiveDate);

    impl ForecastModel for FixedEnd {
        fn history_end(&self) -> NaiveDate {
            self.0
        }

        fn predict(&self, _index: &[NaiveDate]) -> Result<Vec<ForecastPoint>, PredictError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn future_index_starts_the_day_after_history_end() {
        let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let index = FixedEnd(end).future_index(30);

        assert_eq!(index.len(), 30);
        assert_eq!(index[0], NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(index[29], NaiveDate::from_ymd_opt(2024, 7, 30).unwrap());
        assert!(index.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn future_index_is_empty_for_zero_horizon() {
        let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert!(FixedEnd(end).future_index(0).is_empty());
    }
}
