//! `demandcast-forecast`
//!
//! **Responsibility:** pre-trained forecasting models and their execution.
//!
//! This crate is intentionally **not** part of the HTTP layer:
//! - It knows nothing about uploads or request/response shapes.
//! - Models are opaque capabilities behind [`ForecastModel`]; any concrete
//!   implementation that can name its history end and predict over a future
//!   index is substitutable.
//! - The registry is an explicitly constructed, immutable value: callers
//!   build it once at startup and share it read-only.

pub mod model;
pub mod registry;
pub mod runner;
pub mod seasonal;

pub use model::{ForecastModel, PredictError};
pub use registry::{ModelEntry, ModelLoadError, ModelPaths, ModelRegistry};
pub use runner::{ForecastBundle, forecast_all};
pub use seasonal::{ArtifactError, SeasonalTrendModel};
