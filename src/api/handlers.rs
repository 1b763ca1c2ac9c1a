//! HTTP Handlers
//!
//! Upload and liveness endpoints.

use std::time::Instant;

use axum::Json;
use axum::extract::{Multipart, State};
use serde_json::{Value, json};

use crate::core::ValidationReport;
use crate::validation::validate_content;

use super::error::{ApiError, ApiResult};
use super::server::AppState;

/// POST /api/file-validator/upload
///
/// Accept a multipart upload, read the first file-bearing field to
/// completion, and validate it with the process ruleset. Validation is
/// CPU-bound, so it runs on a blocking worker instead of the async
/// executor.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<ValidationReport>> {
    let content = read_file_field(&mut multipart).await?;
    if content.is_empty() {
        return Err(ApiError::EmptyFile);
    }

    let started = Instant::now();
    let rules = state.rules.clone();
    let report = tokio::task::spawn_blocking(move || validate_content(&content, &rules))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    log::debug!(
        "validated upload in {:.3} ms ({} invalid lines)",
        started.elapsed().as_secs_f64() * 1000.0,
        report.invalid_lines.len()
    );

    Ok(Json(report))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Pull the first file field out of the multipart stream, decoded as UTF-8
/// (invalid sequences are replaced rather than rejected).
async fn read_file_field(multipart: &mut Multipart) -> ApiResult<String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(err.to_string()))?
    {
        if field.file_name().is_none() {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|err| ApiError::BadRequest(err.to_string()))?;

        return Ok(String::from_utf8_lossy(&data).into_owned());
    }

    Err(ApiError::BadRequest(
        "no file attached to upload".to_string(),
    ))
}
