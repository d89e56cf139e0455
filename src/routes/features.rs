//! Photo feature endpoints.
//!
//! Photos are analyzed one by one by the vision service and the resulting
//! reports merged into one view of the building. Reports produced elsewhere
//! can be merged directly through `/features/aggregate`.

use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::aggregation::{self, policy::policy_table};
use crate::api::response::DataResponse;
use crate::app::AppState;
use crate::domain::FeatureReport;
use crate::error::{ApiError, ApiResult};
use crate::middleware::RequestIdExt;
use crate::services::{analyze_images, ImageInput};

#[derive(Debug, Deserialize)]
pub struct AggregateRequest {
    #[serde(default)]
    pub reports: Vec<FeatureReport>,
}

/// Analyze uploaded photos and merge the per-photo reports.
///
/// POST /features/analyze (multipart, one file part per photo)
pub async fn analyze_photos(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let max_images = state.settings.max_images_per_request;
    let mut images = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        // Plain form values are not photos
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        if images.len() == max_images {
            return Err(ApiError::BadRequest(format!(
                "Too many images: at most {max_images} per request"
            )));
        }
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        images.push(ImageInput::new(file_name, content_type, bytes.to_vec()));
    }

    tracing::info!(
        request_id = headers.request_id().unwrap_or("-"),
        images = images.len(),
        "Analyzing building photos"
    );

    let analysis = analyze_images(
        state.extractor.as_ref(),
        &images,
        state.settings.vision.max_concurrency,
    )
    .await;

    Ok(Json(DataResponse::new(analysis)))
}

/// Merge already-extracted reports.
///
/// POST /features/aggregate
///
/// Merge failures (no reports, every report failed) come back in the merged
/// report's `error` rather than as an HTTP error.
pub async fn aggregate_reports(Json(req): Json<AggregateRequest>) -> impl IntoResponse {
    tracing::debug!(reports = req.reports.len(), "Aggregating submitted reports");

    let reports: Vec<FeatureReport> = req
        .reports
        .into_iter()
        .map(FeatureReport::normalized)
        .collect();

    Json(DataResponse::new(aggregation::aggregate(&reports)))
}

/// The per-field merge policy table.
///
/// GET /features/merge-policies
pub async fn merge_policies() -> impl IntoResponse {
    Json(DataResponse::new(policy_table()))
}
