use std::collections::BTreeMap;

use serde::Serialize;

use demandcast_core::{ForecastPoint, Metric};

use crate::model::PredictError;
use crate::registry::ModelRegistry;

/// Per-metric forecast sequences for one request.
///
/// Covers only metrics whose model loaded. Serializes directly to the wire
/// shape: metric name → ordered list of records.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ForecastBundle {
    forecasts: BTreeMap<Metric, Vec<ForecastPoint>>,
}

impl ForecastBundle {
    pub fn get(&self, metric: Metric) -> Option<&[ForecastPoint]> {
        self.forecasts.get(&metric).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.forecasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecasts.is_empty()
    }
}

/// Run every loaded model over a fresh future index of `horizon_days`.
///
/// Unavailable models are skipped (the HTTP layer refuses to serve unless
/// all are loaded, so a partial bundle only surfaces in alternative wirings).
/// The first model failure aborts the whole run; no partial bundle is
/// returned on inference failure.
pub fn forecast_all(
    registry: &ModelRegistry,
    horizon_days: u32,
) -> Result<ForecastBundle, PredictError> {
    let mut forecasts = BTreeMap::new();

    for (metric, model) in registry.available() {
        let index = model.future_index(horizon_days);
        let points = model.predict(&index)?;
        tracing::debug!(%metric, points = points.len(), "forecast generated");
        forecasts.insert(metric, points);
    }

    Ok(ForecastBundle { forecasts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::model::ForecastModel;

    struct StubModel {
        end: NaiveDate,
        fail: bool,
    }

    impl ForecastModel for StubModel {
        fn history_end(&self) -> NaiveDate {
            self.end
        }

        fn predict(&self, index: &[NaiveDate]) -> Result<Vec<ForecastPoint>, PredictError> {
            if self.fail {
                return Err(PredictError::NonFinite { date: index[0] });
            }
            Ok(index
                .iter()
                .map(|&ds| ForecastPoint {
                    ds,
                    yhat: 1.0,
                    yhat_lower: 0.0,
                    yhat_upper: 2.0,
                })
                .collect())
        }
    }

    fn stub(fail: bool) -> Arc<dyn ForecastModel> {
        Arc::new(StubModel {
            end: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            fail,
        })
    }

    #[test]
    fn bundles_one_sequence_per_loaded_model() {
        let registry = ModelRegistry::from_models(
            Metric::ALL.iter().map(|&m| (m, stub(false))),
        );

        let bundle = forecast_all(&registry, 30).unwrap();

        assert_eq!(bundle.len(), 3);
        for metric in Metric::ALL {
            let points = bundle.get(metric).unwrap();
            assert_eq!(points.len(), 30);
            assert!(points.windows(2).all(|w| w[0].ds < w[1].ds));
        }
    }

    #[test]
    fn absent_models_are_excluded_from_the_bundle() {
        let registry = ModelRegistry::from_models([
            (Metric::Sales, stub(false)),
            (Metric::Deliveries, stub(false)),
        ]);

        let bundle = forecast_all(&registry, 30).unwrap();

        assert_eq!(bundle.len(), 2);
        assert!(bundle.get(Metric::Quantity).is_none());
    }

    #[test]
    fn one_model_failure_aborts_the_run() {
        let registry = ModelRegistry::from_models([
            (Metric::Sales, stub(false)),
            (Metric::Quantity, stub(true)),
            (Metric::Deliveries, stub(false)),
        ]);

        let err = forecast_all(&registry, 30).unwrap_err();
        assert!(matches!(err, PredictError::NonFinite { .. }));
    }

    #[test]
    fn bundle_serializes_with_metric_names_as_keys() {
        let registry = ModelRegistry::from_models(
            Metric::ALL.iter().map(|&m| (m, stub(false))),
        );
        let bundle = forecast_all(&registry, 2).unwrap();

        let v = serde_json::to_value(&bundle).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("sales"));
        assert!(obj.contains_key("quantity"));
        assert!(obj.contains_key("deliveries"));
        assert_eq!(obj["sales"].as_array().unwrap().len(), 2);
    }
}
