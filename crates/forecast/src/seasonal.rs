use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use demandcast_core::{ForecastPoint, Metric};

use crate::model::{ForecastModel, PredictError};

/// Artifact decode/validation failure.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("malformed model artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// Pre-trained additive model: linear trend plus weekly seasonality.
///
/// Training happens offline; the artifact carries only the fitted
/// coefficients and enough residual information to build prediction
/// intervals. Intervals widen with the square root of the step count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalTrendModel {
    /// Metric this model was trained for.
    pub metric: Metric,
    /// Last date covered by the training history.
    pub history_end: NaiveDate,
    /// Number of observations the model was fitted on.
    pub history_len: usize,
    /// Fitted value at `history_end`.
    pub level: f64,
    /// Per-day slope.
    pub trend: f64,
    /// Additive weekday effects, indexed Monday..Sunday.
    pub weekly: [f64; 7],
    /// Residual standard deviation from fitting.
    pub sigma: f64,
    /// Interval coverage, e.g. 0.95.
    pub confidence_level: f64,
}

impl SeasonalTrendModel {
    /// Decode and validate an artifact from its JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let model: Self = serde_json::from_slice(bytes)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        if !(self.sigma.is_finite() && self.sigma >= 0.0) {
            return Err(ArtifactError::Invalid(format!(
                "sigma must be finite and non-negative, got {}",
                self.sigma
            )));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ArtifactError::Invalid(format!(
                "confidence_level must be in (0, 1), got {}",
                self.confidence_level
            )));
        }
        if !self.level.is_finite() || !self.trend.is_finite() {
            return Err(ArtifactError::Invalid(
                "level and trend must be finite".to_string(),
            ));
        }
        if self.weekly.iter().any(|w| !w.is_finite()) {
            return Err(ArtifactError::Invalid(
                "weekly effects must be finite".to_string(),
            ));
        }
        // Bounded so date arithmetic over any realistic horizon cannot overflow.
        if !(1970..=9999).contains(&self.history_end.year()) {
            return Err(ArtifactError::Invalid(format!(
                "history_end {} outside supported range",
                self.history_end
            )));
        }
        Ok(())
    }

    fn z_score(&self) -> f64 {
        // Two-sided normal quantiles for the common coverage levels.
        match self.confidence_level {
            x if x >= 0.99 => 2.576,
            x if x >= 0.95 => 1.96,
            x if x >= 0.90 => 1.645,
            x if x >= 0.80 => 1.282,
            _ => 1.96,
        }
    }
}

impl ForecastModel for SeasonalTrendModel {
    fn history_end(&self) -> NaiveDate {
        self.history_end
    }

    fn predict(&self, index: &[NaiveDate]) -> Result<Vec<ForecastPoint>, PredictError> {
        let z = self.z_score();
        let mut points = Vec::with_capacity(index.len());

        for &ds in index {
            let steps = ds.signed_duration_since(self.history_end).num_days().max(1);
            let weekday = ds.weekday().num_days_from_monday() as usize;

            let yhat = self.level + self.trend * steps as f64 + self.weekly[weekday];
            let se = self.sigma * (steps as f64).sqrt();
            let yhat_lower = yhat - z * se;
            let yhat_upper = yhat + z * se;

            if !yhat.is_finite() || !yhat_lower.is_finite() || !yhat_upper.is_finite() {
                return Err(PredictError::NonFinite { date: ds });
            }

            points.push(ForecastPoint {
                ds,
                yhat,
                yhat_lower,
                yhat_upper,
            });
        }

        Ok(points)
    }
}
