//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use shardcache::{
    api::create_router, AppState, BoundedCache, MemoryBackend, ShardedStore, StrategyKind,
    MAX_ITEM_SIZE,
};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    let cache = BoundedCache::new(1024 * 1024, StrategyKind::Fifo);
    let state = AppState::new(ShardedStore::new(cache, MemoryBackend::new()));
    create_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn set_request(json: String) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/set")
        .header("content-type", "application/json")
        .body(Body::from(json))
        .unwrap()
}

fn get_request(key: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/get/{}", key))
        .body(Body::empty())
        .unwrap()
}

// == SET Endpoint Tests ==

#[tokio::test]
async fn test_set_endpoint_success() {
    let app = create_test_app();

    let response = app
        .oneshot(set_request(
            r#"{"key":"test_key","value":"test_value"}"#.to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert!(json.get("message").is_some());
    assert!(json["message"].as_str().unwrap().contains("test_key"));
}

#[tokio::test]
async fn test_set_endpoint_empty_key_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(set_request(r#"{"key":"","value":"v"}"#.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_set_endpoint_oversized_value() {
    let app = create_test_app();

    let big = "x".repeat(MAX_ITEM_SIZE + 1);
    let response = app
        .oneshot(set_request(format!(r#"{{"key":"big","value":"{}"}}"#, big)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("per-item limit"));
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_returns_written_value() {
    let app = create_test_app();

    let set_response = app
        .clone()
        .oneshot(set_request(
            r#"{"key":"get_key","value":"get_value"}"#.to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(set_response.status(), StatusCode::OK);

    let get_response = app.oneshot(get_request("get_key")).await.unwrap();

    assert_eq!(get_response.status(), StatusCode::OK);
    let json = body_to_json(get_response.into_body()).await;
    assert_eq!(json["key"].as_str().unwrap(), "get_key");
    assert_eq!(json["value"].as_str().unwrap(), "get_value");
}

#[tokio::test]
async fn test_get_endpoint_unknown_key_reads_through_as_empty() {
    // The backend contract has no not-found channel; absence is the
    // empty value, so the read-through answer is 200 with "".
    let app = create_test_app();

    let response = app.oneshot(get_request("never_set")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["value"].as_str().unwrap(), "");
}

#[tokio::test]
async fn test_get_endpoint_overwrite_returns_latest() {
    let app = create_test_app();

    for value in ["first", "second"] {
        let response = app
            .clone()
            .oneshot(set_request(format!(
                r#"{{"key":"k","value":"{}"}}"#,
                value
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get_request("k")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["value"].as_str().unwrap(), "second");
}

// == Write-Through Persistence Tests ==

#[tokio::test]
async fn test_value_survives_cache_eviction() {
    // A cache far smaller than the data set: every write still persists
    // to the backend, so evicted keys read through with their values
    // intact.
    let cache = BoundedCache::new(1024, StrategyKind::Fifo);
    let state = AppState::new(ShardedStore::new(cache, MemoryBackend::new()));
    let app = create_router(state);

    for i in 0..50 {
        let response = app
            .clone()
            .oneshot(set_request(format!(
                r#"{{"key":"key{}","value":"value-{:0>100}"}}"#,
                i, i
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    for i in 0..50 {
        let response = app
            .clone()
            .oneshot(get_request(&format!("key{}", i)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_to_json(response.into_body()).await;
        assert_eq!(
            json["value"].as_str().unwrap(),
            format!("value-{:0>100}", i)
        );
    }
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
