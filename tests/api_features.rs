mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use building_estimator::domain::{FeatureReport, GarageType, RoofStyle};
use common::{app, app_with, body_json, get, json_request, multipart_request, StubExtractor};

fn front() -> FeatureReport {
    FeatureReport {
        roof_style: RoofStyle::Hip,
        stories: 2,
        window_count: 6,
        has_garage: true,
        garage_type: GarageType::Attached,
        overall_confidence: 0.8,
        notes: "front".into(),
        ..FeatureReport::default()
    }
}

fn back() -> FeatureReport {
    FeatureReport {
        roof_style: RoofStyle::Gable,
        stories: 1,
        window_count: 4,
        overall_confidence: 0.6,
        notes: "back".into(),
        ..FeatureReport::default()
    }
}

fn stub() -> StubExtractor {
    StubExtractor::new([("front.jpg", front()), ("back.png", back())])
}

#[tokio::test]
async fn analyze_merges_uploaded_photos() {
    let request = multipart_request(
        "/features/analyze",
        &[("front.jpg", "image/jpeg"), ("back.png", "image/png")],
    );
    let response = app_with(stub(), &[]).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["image_count"], 2);
    assert_eq!(data["successful_count"], 2);
    assert!(data["analysis_id"].is_string());
    assert!(data["analyzed_at"].is_string());
    assert_eq!(data["images"][0]["file_name"], "front.jpg");
    assert_eq!(data["images"][1]["file_name"], "back.png");

    let merged = &data["merged"];
    assert_eq!(merged["roof_style"], "Hip");
    assert_eq!(merged["stories"], 2);
    assert_eq!(merged["window_count"], 10);
    assert_eq!(merged["has_garage"], true);
    assert_eq!(merged["garage_type"], "Attached");
    assert_eq!(merged["notes"], "front | back");
    assert!(merged.get("error").is_none());
}

#[tokio::test]
async fn analyze_keeps_failed_photos_out_of_the_merge() {
    let request = multipart_request(
        "/features/analyze",
        &[("blurry.jpg", "image/jpeg"), ("back.png", "image/png")],
    );
    let response = app_with(stub(), &[]).oneshot(request).await.unwrap();
    let body = body_json(response).await;
    let data = &body["data"];

    assert_eq!(data["successful_count"], 1);
    assert_eq!(data["images"][0]["report"]["error"], "unreadable: blurry.jpg");
    assert_eq!(data["merged"]["window_count"], 4);
    assert_eq!(data["merged"]["notes"], "back");
}

#[tokio::test]
async fn analyze_rejects_too_many_images() {
    let request = multipart_request(
        "/features/analyze",
        &[
            ("front.jpg", "image/jpeg"),
            ("back.png", "image/png"),
            ("side.jpg", "image/jpeg"),
        ],
    );
    let response = app_with(stub(), &[("MAX_IMAGES_PER_REQUEST", "2")])
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn analyze_with_no_images_reports_merge_error() {
    let request = multipart_request("/features/analyze", &[]);
    let response = app_with(stub(), &[]).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["merged"]["error"], "No images provided");
}

#[tokio::test]
async fn aggregate_merges_submitted_reports() {
    let payload = json!({
        "reports": [
            {"stories": 1, "window_count": 5, "confidence": 0.6, "has_garage": false},
            {"stories": 2, "window_count": 7, "confidence": 0.6, "has_garage": true}
        ]
    });
    let response = app()
        .oneshot(json_request("POST", "/features/aggregate", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let merged = &body_json(response).await["data"];
    assert_eq!(merged["stories"], 2);
    assert_eq!(merged["window_count"], 12);
    assert_eq!(merged["has_garage"], true);
    let confidence = merged["overall_confidence"].as_f64().unwrap();
    assert!((confidence - 0.66).abs() < 1e-9);
}

#[tokio::test]
async fn aggregate_reports_failures_in_body() {
    let empty = json!({"reports": []});
    let response = app()
        .oneshot(json_request("POST", "/features/aggregate", &empty))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["error"], "No images provided");

    let failed = json!({"reports": [{"error": "API error: timeout"}, {"error": "other"}]});
    let response = app()
        .oneshot(json_request("POST", "/features/aggregate", &failed))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["data"]["error"], "API error: timeout");
}

#[tokio::test]
async fn merge_policies_are_published() {
    let response = app().oneshot(get("/features/merge-policies")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let table = body["data"].as_array().unwrap();
    let policy_of = |field: &str| {
        table
            .iter()
            .find(|row| row["field"] == field)
            .map(|row| row["policy"].clone())
            .unwrap()
    };
    assert_eq!(policy_of("window_count"), "sum");
    assert_eq!(policy_of("stories"), "max");
    assert_eq!(policy_of("has_chimney"), "any_present");
    assert_eq!(policy_of("deck_material"), "conditional_on");
    assert_eq!(policy_of("photo_quality"), "ordinal_max");
}
