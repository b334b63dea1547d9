use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use demandcast_core::Metric;

use crate::model::ForecastModel;
use crate::seasonal::SeasonalTrendModel;

/// Startup load failure for one model slot. Recorded, never fatal.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to load model from {}: {detail}", .path.display())]
    Malformed { path: PathBuf, detail: String },
}

/// Configured artifact location per metric.
#[derive(Debug, Clone)]
pub struct ModelPaths {
    by_metric: BTreeMap<Metric, PathBuf>,
}

impl ModelPaths {
    /// Conventional layout: `{dir}/{metric}_model.json` for every metric.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let by_metric = Metric::ALL
            .iter()
            .map(|&m| (m, dir.join(format!("{m}_model.json"))))
            .collect();
        Self { by_metric }
    }

    /// Override a single metric's artifact path.
    pub fn with_path(mut self, metric: Metric, path: impl Into<PathBuf>) -> Self {
        self.by_metric.insert(metric, path.into());
        self
    }

    pub fn get(&self, metric: Metric) -> &Path {
        // `in_dir` populates every metric; `with_path` can only replace.
        &self.by_metric[&metric]
    }
}

/// One registry slot: the metric, its handle if the artifact loaded, and the
/// recorded failure otherwise. Presence is an explicit `Option`; a loaded
/// model is always treated as available.
pub struct ModelEntry {
    metric: Metric,
    handle: Option<Arc<dyn ForecastModel>>,
    load_error: Option<ModelLoadError>,
}

impl ModelEntry {
    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn model(&self) -> Option<&Arc<dyn ForecastModel>> {
        self.handle.as_ref()
    }

    pub fn load_error(&self) -> Option<&ModelLoadError> {
        self.load_error.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.handle.is_some()
    }
}

/// All configured models, loaded once at process start and immutable
/// thereafter. Shared read-only across requests (no interior mutability, so
/// unsynchronized concurrent reads are safe).
pub struct ModelRegistry {
    entries: BTreeMap<Metric, ModelEntry>,
}

impl ModelRegistry {
    /// Attempt to load every configured artifact. Failures are recorded on
    /// the entry and logged; the registry itself always constructs.
    pub fn load(paths: &ModelPaths) -> Self {
        let mut entries = BTreeMap::new();

        for &metric in &Metric::ALL {
            let path = paths.get(metric);
            let entry = match load_model(metric, path) {
                Ok(handle) => {
                    tracing::info!(%metric, path = %path.display(), "loaded forecasting model");
                    ModelEntry {
                        metric,
                        handle: Some(handle),
                        load_error: None,
                    }
                }
                Err(err) => {
                    tracing::error!(%metric, error = %err, "forecasting model unavailable");
                    ModelEntry {
                        metric,
                        handle: None,
                        load_error: Some(err),
                    }
                }
            };
            entries.insert(metric, entry);
        }

        Self { entries }
    }

    /// Build a registry from already-constructed models (tests, alternative
    /// wiring). Metrics not supplied have no entry.
    pub fn from_models<I>(models: I) -> Self
    where
        I: IntoIterator<Item = (Metric, Arc<dyn ForecastModel>)>,
    {
        let entries = models
            .into_iter()
            .map(|(metric, handle)| {
                (
                    metric,
                    ModelEntry {
                        metric,
                        handle: Some(handle),
                        load_error: None,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// True iff every configured metric has a loaded model.
    pub fn all_available(&self) -> bool {
        Metric::ALL
            .iter()
            .all(|m| self.entries.get(m).is_some_and(ModelEntry::is_available))
    }

    /// Loaded models only, in metric order.
    pub fn available(&self) -> impl Iterator<Item = (Metric, Arc<dyn ForecastModel>)> + '_ {
        self.entries
            .values()
            .filter_map(|e| e.model().map(|h| (e.metric(), Arc::clone(h))))
    }

    pub fn entries(&self) -> impl Iterator<Item = &ModelEntry> {
        self.entries.values()
    }

    pub fn entry(&self, metric: Metric) -> Option<&ModelEntry> {
        self.entries.get(&metric)
    }
}

fn load_model(metric: Metric, path: &Path) -> Result<Arc<dyn ForecastModel>, ModelLoadError> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ModelLoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ModelLoadError::Malformed {
                path: path.to_path_buf(),
                detail: e.to_string(),
            }
        }
    })?;

    let model = SeasonalTrendModel::from_json(&bytes).map_err(|e| ModelLoadError::Malformed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    if model.metric != metric {
        return Err(ModelLoadError::Malformed {
            path: path.to_path_buf(),
            detail: format!("artifact is trained for '{}', expected '{metric}'", model.metric),
        });
    }

    Ok(Arc::new(model))
}
