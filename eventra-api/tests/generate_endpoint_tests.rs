//! Integration tests for the generation endpoint
//!
//! Drives the full router through `tower::ServiceExt::oneshot` with mock
//! providers wired into the coordinator, covering the boundary contract:
//! validation failures, source selection, and the fallback error field.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use eventra_api::{create_api_router, ApiConfig, AppState};
use eventra_core::{EventDraft, EventLocation};
use eventra_llm::{GenerationCoordinator, MockDraftProvider};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

fn sample_draft(title: &str) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        description: "Provider-generated description".to_string(),
        location: EventLocation {
            name: "Riverside Hall".to_string(),
            address: "9 Dock Lane".to_string(),
            city: "Portland".to_string(),
            country: "United States".to_string(),
        },
        suggested_date: "2026-11-05".to_string(),
        capacity: 80,
        is_free: false,
        suggested_price: 15.0,
        category_recommendations: vec!["music".to_string()],
    }
}

fn test_app(coordinator: GenerationCoordinator) -> Router {
    create_api_router(AppState::new(coordinator), &ApiConfig::default())
}

fn post_generate(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/v1/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_missing_category_yields_400_with_error_body() {
    let app = test_app(GenerationCoordinator::new(None, None));

    let response = app
        .oneshot(post_generate(r#"{"eventDetails": "A coding bootcamp"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("eventCategory"));
}

#[tokio::test]
async fn test_missing_details_yields_400() {
    let app = test_app(GenerationCoordinator::new(None, None));

    let response = app
        .oneshot(post_generate(r#"{"eventCategory": "workshop"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("eventDetails"));
}

#[tokio::test]
async fn test_blank_category_yields_400() {
    let app = test_app(GenerationCoordinator::new(None, None));

    let response = app
        .oneshot(post_generate(
            r#"{"eventCategory": "  ", "eventDetails": "something"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validation_failure_makes_no_provider_call() {
    let primary = Arc::new(MockDraftProvider::succeeding("openai", sample_draft("x")));
    let app = test_app(GenerationCoordinator::new(Some(primary.clone()), None));

    let response = app
        .oneshot(post_generate(r#"{"eventDetails": "no category"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(primary.call_count(), 0);
}

#[tokio::test]
async fn test_no_providers_returns_fallback_without_error_field() {
    let app = test_app(GenerationCoordinator::new(None, None));

    let response = app
        .oneshot(post_generate(
            r#"{"eventCategory": "charity-fundraiser", "eventDetails": ""}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;

    assert_eq!(json["source"], "fallback");
    // Credential absence is not a provider failure: no error field.
    assert!(json.get("error").is_none());

    let event = &json["event"];
    assert_eq!(event["isFree"], false);
    assert_eq!(event["suggestedPrice"], 25.0);
    assert_eq!(event["capacity"], 50);
    assert_eq!(event["description"], "Join us for this special event.");
}

#[tokio::test]
async fn test_primary_success_reports_primary_source() {
    let primary = Arc::new(MockDraftProvider::succeeding(
        "openai",
        sample_draft("From primary"),
    ));
    let secondary = Arc::new(MockDraftProvider::succeeding(
        "anthropic",
        sample_draft("From secondary"),
    ));
    let app = test_app(GenerationCoordinator::new(
        Some(primary.clone()),
        Some(secondary.clone()),
    ));

    let response = app
        .oneshot(post_generate(
            r#"{"eventCategory": "concert", "eventDetails": "Open-air show"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;

    assert_eq!(json["source"], "primary");
    assert_eq!(json["event"]["title"], "From primary");
    assert_eq!(secondary.call_count(), 0);
}

#[tokio::test]
async fn test_both_providers_failing_returns_fallback_with_error() {
    let primary = Arc::new(MockDraftProvider::failing("openai", "503 upstream"));
    let secondary = Arc::new(MockDraftProvider::failing("anthropic", "network down"));
    let app = test_app(GenerationCoordinator::new(Some(primary), Some(secondary)));

    let response = app
        .oneshot(post_generate(
            r#"{"eventCategory": "workshop", "eventDetails": "A 2-hour coding bootcamp for teens"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;

    assert_eq!(json["source"], "fallback");
    assert!(!json["error"].as_str().unwrap().is_empty());

    let event = &json["event"];
    assert_eq!(event["description"], "A 2-hour coding bootcamp for teens");
    assert_eq!(event["isFree"], true);
    assert_eq!(event["suggestedPrice"], 0.0);
}

#[tokio::test]
async fn test_options_preflight_is_answered() {
    let app = test_app(GenerationCoordinator::new(None, None));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/v1/generate")
        .header(header::ORIGIN, "https://anywhere.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_health_ping() {
    let app = test_app(GenerationCoordinator::new(None, None));

    let request = Request::builder()
        .uri("/health/ping")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app(GenerationCoordinator::new(None, None));

    let request = Request::builder()
        .uri("/v1/unknown")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
