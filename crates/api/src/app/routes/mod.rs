use axum::{
    Router,
    routing::{get, post},
};

pub mod forecast;
pub mod system;

/// Router for all service endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route(
            "/upload-and-forecast-all",
            post(forecast::upload_and_forecast_all),
        )
}
