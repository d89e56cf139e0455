#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use building_estimator::app::{create_app, AppState};
use building_estimator::config::Settings;
use building_estimator::domain::FeatureReport;
use building_estimator::services::{FeatureExtractor, ImageInput, ServiceStatus};

pub const BOUNDARY: &str = "estimator-test-boundary";

/// Extractor that answers from a fixed table keyed by file name.
pub struct StubExtractor {
    reports: HashMap<String, FeatureReport>,
}

impl StubExtractor {
    pub fn new(reports: impl IntoIterator<Item = (&'static str, FeatureReport)>) -> Self {
        Self {
            reports: reports
                .into_iter()
                .map(|(name, report)| (name.to_string(), report))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            reports: HashMap::new(),
        }
    }
}

#[async_trait]
impl FeatureExtractor for StubExtractor {
    async fn extract(&self, image: &ImageInput) -> FeatureReport {
        self.reports
            .get(&image.file_name)
            .cloned()
            .unwrap_or_else(|| FeatureReport::from_error(format!("unreadable: {}", image.file_name)))
    }

    async fn health_check(&self) -> ServiceStatus {
        ServiceStatus::Ok
    }
}

pub fn settings(overrides: &[(&str, &str)]) -> Settings {
    let vars: HashMap<String, String> = overrides
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

pub fn app_with(extractor: StubExtractor, overrides: &[(&str, &str)]) -> Router {
    create_app(AppState::new(settings(overrides), Arc::new(extractor)))
}

pub fn app() -> Router {
    app_with(StubExtractor::empty(), &[])
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Multipart request with one file part per `(file_name, content_type)`.
pub fn multipart_request(uri: &str, files: &[(&str, &str)]) -> Request<Body> {
    let mut body = Vec::new();
    for (file_name, content_type) in files {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"images\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0]);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
