use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;
use crate::services::ServiceStatus;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: ServiceHealth,
}

#[derive(Serialize)]
pub struct ServiceHealth {
    pub vision_service: ServiceStatus,
}

/// Health check endpoint - public
///
/// The takeoff engine has no dependencies, so the service is at worst
/// degraded and always answers 200.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let vision = state.extractor.health_check().await;

    let status = if vision == ServiceStatus::Ok {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services: ServiceHealth {
            vision_service: vision,
        },
    })
}
