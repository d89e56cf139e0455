//! Quantity takeoff endpoint.

use axum::{response::IntoResponse, Json};

use crate::api::response::DataResponse;
use crate::domain::BuildingSpec;
use crate::error::ApiResult;
use crate::estimating;

/// Compute material quantities for every trade.
///
/// POST /estimate
pub async fn estimate(Json(spec): Json<BuildingSpec>) -> ApiResult<impl IntoResponse> {
    spec.validate()?;

    tracing::info!(
        length = spec.length,
        width = spec.width,
        stories = spec.stories,
        climate_zone = spec.climate_zone,
        "Estimating building"
    );

    let takeoff = estimating::estimate(&spec);

    Ok(Json(DataResponse::new(takeoff)))
}
