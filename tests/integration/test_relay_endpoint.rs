//! Integration Tests for the Contact Relay Endpoint
//!
//! Drives `POST /send-email` through the full router with a mock provider.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use std::sync::Arc;
use test_utils::{
    build_app, read_json, static_dir_with_index, submission_json, MockMailProvider,
    ProviderBehavior,
};
use tower::ServiceExt;

fn post_json(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/send-email")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn complete_submission() -> String {
    submission_json(
        Some("Ada Lovelace"),
        Some("ada@example.com"),
        Some("Engines"),
        Some("Let's build an analytical engine."),
    )
}

#[tokio::test]
async fn test_valid_submission_is_relayed() {
    let provider = Arc::new(MockMailProvider::accepting());
    let assets = static_dir_with_index();
    let app = build_app(provider.clone(), &assets);

    let response = app.oneshot(post_json(complete_submission())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Message sent successfully!");

    let sent = provider.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply_to, "ada@example.com");
    assert_eq!(sent[0].subject, "Portfolio Contact: Engines");
    assert_eq!(sent[0].to, "nr0498@srmist.edu.in");
    assert_eq!(sent[0].from, "noreply@portfolio.dev");
}

#[tokio::test]
async fn test_each_missing_field_is_rejected() {
    let fields: [Option<&str>; 4] = [
        Some("Ada"),
        Some("ada@example.com"),
        Some("Hi"),
        Some("Hello"),
    ];

    for missing in 0..fields.len() {
        for replacement in [None, Some("")] {
            let mut values = fields;
            values[missing] = replacement;

            let provider = Arc::new(MockMailProvider::accepting());
            let assets = static_dir_with_index();
            let app = build_app(provider.clone(), &assets);

            let body = submission_json(values[0], values[1], values[2], values[3]);
            let response = app.oneshot(post_json(body)).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = read_json(response).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["message"], "All fields are required");
            assert_eq!(provider.call_count(), 0, "provider called for field {}", missing);
        }
    }
}

#[tokio::test]
async fn test_whitespace_fields_are_relayed_as_submitted() {
    let provider = Arc::new(MockMailProvider::accepting());
    let assets = static_dir_with_index();
    let app = build_app(provider.clone(), &assets);

    let body = submission_json(
        Some("Ada"),
        Some(" ada@example.com "),
        Some("   "),
        Some("Hello"),
    );
    let response = app.oneshot(post_json(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let sent = provider.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply_to, " ada@example.com ");
    assert_eq!(sent[0].subject, "Portfolio Contact:    ");
}

#[tokio::test]
async fn test_provider_failure_returns_500_without_retry() {
    let provider = Arc::new(MockMailProvider::failing());
    let assets = static_dir_with_index();
    let app = build_app(provider.clone(), &assets);

    let response = app.oneshot(post_json(complete_submission())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to send message. Please try again later.");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_provider_detail_not_leaked() {
    let provider = Arc::new(MockMailProvider::failing());
    let assets = static_dir_with_index();
    let app = build_app(provider, &assets);

    let response = app.oneshot(post_json(complete_submission())).await.unwrap();
    let body = read_json(response).await.to_string();
    assert!(!body.contains("simulated rejection"));
}

#[tokio::test]
async fn test_rejected_credentials_return_500() {
    let provider = Arc::new(MockMailProvider::new(ProviderBehavior::Unauthorized));
    let assets = static_dir_with_index();
    let app = build_app(provider.clone(), &assets);

    let response = app.oneshot(post_json(complete_submission())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Failed to send message. Please try again later.");
    assert!(!body.to_string().contains("simulated bad key"));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let provider = Arc::new(MockMailProvider::accepting());
    let assets = static_dir_with_index();
    let app = build_app(provider.clone(), &assets);

    let response = app
        .oneshot(post_json("{not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["message"], "All fields are required");
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_resubmission_sends_duplicate() {
    let provider = Arc::new(MockMailProvider::accepting());
    let assets = static_dir_with_index();
    let app = build_app(provider.clone(), &assets);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_json(complete_submission()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(provider.call_count(), 2);
}
