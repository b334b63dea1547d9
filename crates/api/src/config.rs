//! Process configuration, read once from the environment at startup.

use std::path::PathBuf;

use demandcast_forecast::ModelPaths;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding `{metric}_model.json` artifacts.
    pub model_dir: PathBuf,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(%raw, fallback = DEFAULT_PORT, "PORT is not a valid number");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let model_dir = std::env::var("MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("models"));

        Self {
            host,
            port,
            model_dir,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn model_paths(&self) -> ModelPaths {
        ModelPaths::in_dir(&self.model_dir)
    }
}
