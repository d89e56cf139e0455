pub mod estimate;
pub mod features;
pub mod health;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Quantity takeoff
        .route("/estimate", post(estimate::estimate))
        // Photo features
        .route("/features/analyze", post(features::analyze_photos))
        .route("/features/aggregate", post(features::aggregate_reports))
        .route("/features/merge-policies", get(features::merge_policies))
}
