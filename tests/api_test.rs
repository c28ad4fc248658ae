//! End-to-end tests for the HTTP layer against a fixture engine

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use media_search_service::{
    api::{build_router, AppState},
    search::{EngineClient, SearchService},
};
use mockito::{Matcher, Server};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Helper to build the full router over a mockito engine
fn fixture_app(server: &Server) -> Router {
    let client = EngineClient::from_parts(
        server.url(),
        "media".to_string(),
        "reader".to_string(),
        "secret".to_string(),
        false,
        5,
    )
    .unwrap();

    build_router(AppState::new(Arc::new(SearchService::new(client))))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn engine_response(total: u64, sources: &[Value]) -> String {
    let hits: Vec<Value> = sources
        .iter()
        .map(|source| json!({ "_index": "media", "_score": 1.0, "_source": source }))
        .collect();

    json!({
        "took": 1,
        "hits": {
            "total": { "value": total, "relation": "eq" },
            "hits": hits,
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_api_search_returns_paginated_envelope() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/media/_search")
        .match_body(Matcher::Json(json!({
            "from": 0,
            "size": 2,
            "query": {
                "bool": {
                    "must": [
                        { "multi_match": { "query": "cat", "fields": ["suchtext"] } }
                    ]
                }
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(engine_response(
            5,
            &[
                json!({ "bildnummer": "1", "suchtext": "cat one" }),
                json!({ "bildnummer": "2", "suchtext": "cat two" }),
            ],
        ))
        .create_async()
        .await;

    let app = fixture_app(&server);
    let (status, body) = get(app, "/api/search?q=cat&size=2&page=1").await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);

    let envelope: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(envelope["total"], 5);
    assert_eq!(envelope["page"], 1);
    assert_eq!(envelope["size"], 2);

    let results = envelope["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["id"], "0000000001");
    assert_eq!(results[0]["title"], "cat one");
    assert_eq!(results[0]["db"], "st");
    assert_eq!(
        results[0]["thumbnail_url"],
        "https://www.imago-images.de/bild/st/0000000001/s.jpg"
    );
}

#[tokio::test]
async fn test_api_search_engine_failure_returns_500_with_error_key() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/media/_search")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let app = fixture_app(&server);
    let (status, body) = get(app, "/api/search?q=cat").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let error: Value = serde_json::from_slice(&body).unwrap();
    assert!(error.get("error").is_some());
    assert!(error["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_api_search_passes_arbitrary_params_as_filters() {
    let mut server = Server::new_async().await;

    // Exact body: one match clause on `color`, no full-text clause.
    let mock = server
        .mock("POST", "/media/_search")
        .match_body(Matcher::Json(json!({
            "from": 0,
            "size": 20,
            "query": {
                "bool": {
                    "must": [
                        { "match": { "color": "red" } }
                    ]
                }
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(engine_response(0, &[]))
        .create_async()
        .await;

    let app = fixture_app(&server);
    let (status, _body) = get(app, "/api/search?color=red").await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_api_search_invalid_size_is_rejected_before_the_engine() {
    let server = Server::new_async().await;

    let app = fixture_app(&server);
    let (status, body) = get(app, "/api/search?size=lots").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("size"));
}

#[tokio::test]
async fn test_search_page_renders_results() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/media/_search")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(engine_response(
            1,
            &[json!({
                "bildnummer": "7",
                "suchtext": "lighthouse at dusk",
                "datum": "2023-05-01T12:00:00Z"
            })],
        ))
        .create_async()
        .await;

    let app = fixture_app(&server);
    let (status, body) = get(app, "/search?q=lighthouse").await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("lighthouse at dusk"));
    assert!(html.contains("2023-05-01"));
    assert!(html.contains("/bild/st/0000000007/s.jpg"));
}

#[tokio::test]
async fn test_search_page_renders_error_page_on_engine_failure() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/media/_search")
        .with_status(503)
        .with_body("engine unavailable")
        .create_async()
        .await;

    let app = fixture_app(&server);
    let (status, body) = get(app, "/search?q=cat").await;

    // The page route renders the failure instead of failing the request
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Search unavailable"));
}

#[tokio::test]
async fn test_landing_page_is_static() {
    let server = Server::new_async().await;

    let app = fixture_app(&server);
    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Media Archive"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = Server::new_async().await;

    let app = fixture_app(&server);
    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");
}
