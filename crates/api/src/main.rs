use demandcast_api::app::{self, AppState};
use demandcast_api::config::ApiConfig;
use demandcast_forecast::ModelRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    demandcast_observability::init();

    let config = ApiConfig::from_env();
    let registry = ModelRegistry::load(&config.model_paths());
    if !registry.all_available() {
        tracing::warn!(
            model_dir = %config.model_dir.display(),
            "one or more forecasting models failed to load; forecast requests will be refused"
        );
    }

    let app = app::build_app(AppState { registry });

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
