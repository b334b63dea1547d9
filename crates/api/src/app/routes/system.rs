use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use serde_json::json;

use crate::app::AppState;

/// Always 200; availability gating belongs to the forecast route. The body
/// reports per-model load state so probes can tell a degraded start apart
/// from a healthy one.
pub async fn health(Extension(state): Extension<Arc<AppState>>) -> Json<serde_json::Value> {
    let models: serde_json::Map<String, serde_json::Value> = state
        .registry
        .entries()
        .map(|e| (e.metric().to_string(), json!(e.is_available())))
        .collect();

    let status = if state.registry.all_available() {
        "ok"
    } else {
        "degraded"
    };

    Json(json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "models": models,
    }))
}
