use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use demandcast_forecast::PredictError;
use demandcast_ingest::IngestError;

pub const MODELS_UNAVAILABLE: &str = "One or more pre-trained models are not available.";
pub const INTERNAL_ERROR: &str = "An internal server error occurred.";

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({ "error": message.into() })),
    )
        .into_response()
}

/// Opaque 500: full detail goes to the server log, never to the client.
pub fn internal_error(detail: &dyn std::fmt::Display) -> axum::response::Response {
    tracing::error!(error = %detail, "internal error while handling forecast request");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
}

pub fn ingest_error_to_response(err: IngestError) -> axum::response::Response {
    match &err {
        IngestError::MissingFilePart
        | IngestError::EmptySelection
        | IngestError::UnsupportedFileType
        | IngestError::InvalidDate { .. } => json_error(StatusCode::BAD_REQUEST, err.to_string()),
        IngestError::MissingColumns { missing } => {
            tracing::warn!(?missing, "upload rejected: missing required columns");
            json_error(StatusCode::BAD_REQUEST, err.to_string())
        }
        IngestError::Unreadable { .. } => internal_error(&err),
    }
}

pub fn predict_error_to_response(err: PredictError) -> axum::response::Response {
    internal_error(&err)
}
