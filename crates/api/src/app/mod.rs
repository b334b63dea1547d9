//! HTTP API application wiring (Axum router + state).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use demandcast_forecast::ModelRegistry;

pub mod errors;
pub mod routes;

/// Read-only state shared by all handlers. Built once at startup and never
/// mutated; the registry is safe for unsynchronized concurrent reads.
pub struct AppState {
    pub registry: ModelRegistry,
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(state: AppState) -> Router {
    // The browser client is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .layer(Extension(Arc::new(state)))
}
