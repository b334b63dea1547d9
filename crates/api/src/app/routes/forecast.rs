use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Extension, FromRequest, Multipart, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use demandcast_core::DEFAULT_HORIZON_DAYS;
use demandcast_forecast::forecast_all;
use demandcast_ingest::{parse_dataset, IngestError};

use crate::app::{errors, AppState};

struct Upload {
    filename: String,
    bytes: Bytes,
}

/// `POST /upload-and-forecast-all`: multipart upload under field `file`.
///
/// Linear flow, each step terminal on failure: registry gate (503), file
/// extraction (400), parse/validate (400), inference (500), then 200.
pub async fn upload_and_forecast_all(
    Extension(state): Extension<Arc<AppState>>,
    req: Request,
) -> Response {
    // Availability is checked before the body is touched, so a missing model
    // answers 503 whatever the request looks like.
    if !state.registry.all_available() {
        return errors::json_error(StatusCode::SERVICE_UNAVAILABLE, errors::MODELS_UNAVAILABLE);
    }

    let multipart = match Multipart::from_request(req, &()).await {
        Ok(m) => m,
        Err(_) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                IngestError::MissingFilePart.to_string(),
            );
        }
    };

    let upload = match extract_upload(multipart).await {
        Ok(upload) => upload,
        Err(resp) => return resp,
    };

    let dataset = match parse_dataset(&upload.filename, &upload.bytes) {
        Ok(dataset) => dataset,
        Err(err) => return errors::ingest_error_to_response(err),
    };

    // The upload is validated only; predictions come from each model's own
    // training history plus the fixed horizon.
    let span = dataset
        .date_span()
        .map(|(first, last)| format!("{first}..{last}"))
        .unwrap_or_else(|| "empty".to_string());
    tracing::info!(
        filename = %upload.filename,
        rows = dataset.len(),
        %span,
        "upload validated"
    );

    match forecast_all(&state.registry, DEFAULT_HORIZON_DAYS) {
        Ok(bundle) => (StatusCode::OK, Json(bundle)).into_response(),
        Err(err) => errors::predict_error_to_response(err),
    }
}

/// Pull the `file` field out of the form. Other fields are skipped; a body
/// without one answers the same 400 as a non-multipart body.
async fn extract_upload(mut multipart: Multipart) -> Result<Upload, Response> {
    let missing_file_part = || {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            IngestError::MissingFilePart.to_string(),
        )
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| missing_file_part())?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("").trim().to_string();
        if filename.is_empty() {
            return Err(errors::json_error(
                StatusCode::BAD_REQUEST,
                IngestError::EmptySelection.to_string(),
            ));
        }

        let bytes = field.bytes().await.map_err(|e| errors::internal_error(&e))?;
        return Ok(Upload { filename, bytes });
    }

    Err(missing_file_part())
}
