//! HTTP API Tests
//!
//! Drives the full router in-process and checks request validation and the
//! mapping of store outcomes to status codes:
//! - 400 for invalid ids, bodies and query parameters
//! - 404 for missing films, 409 for duplicates, 500 for failed saves

use std::fs;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use filmstore::codec::DocumentFile;
use filmstore::films::{default_films, FilmStore, NewFilm};
use filmstore::http_server::{build_router, HttpServerConfig};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

// =============================================================================
// Test Utilities
// =============================================================================

fn router_for(store: FilmStore) -> Router {
    build_router(&HttpServerConfig::default(), store)
}

fn test_router(temp: &TempDir) -> Router {
    router_for(FilmStore::new(temp.path().join("films.json")))
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn dune() -> Value {
    json!({
        "title": "Dune",
        "director": "Denis Villeneuve",
        "duration": 155,
        "budget": 165000000,
        "imageUrl": "https://example.com/dune.jpg"
    })
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let temp = TempDir::new().unwrap();
    let (status, body) = send(&test_router(&temp), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let temp = TempDir::new().unwrap();
    let request = Request::builder()
        .uri("/films")
        .body(Body::empty())
        .unwrap();

    let response = test_router(&temp).oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// =============================================================================
// GET /films
// =============================================================================

#[tokio::test]
async fn test_list_defaults() {
    let temp = TempDir::new().unwrap();
    let (status, body) = send(&test_router(&temp), Method::GET, "/films", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), default_films().len());
    assert_eq!(body[0]["title"], "Inception");
    assert_eq!(body[0]["imageUrl"], "https://example.com/inception.jpg");
}

#[tokio::test]
async fn test_list_minimum_duration() {
    let temp = TempDir::new().unwrap();
    let (status, body) = send(
        &test_router(&temp),
        Method::GET,
        "/films?minimum-duration=150",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let films = body.as_array().unwrap();
    assert_eq!(films.len(), 1);
    assert_eq!(films[0]["title"], "Interstellar");
}

#[tokio::test]
async fn test_list_invalid_minimum_duration() {
    let temp = TempDir::new().unwrap();
    let router = test_router(&temp);

    for query in ["abc", "0", "-10"] {
        let uri = format!("/films?minimum-duration={}", query);
        let (status, body) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "query {}", query);
        assert_eq!(body["code"], 400);
    }
}

// =============================================================================
// GET /films/:id
// =============================================================================

#[tokio::test]
async fn test_get_one() {
    let temp = TempDir::new().unwrap();
    let router = test_router(&temp);

    let (status, body) = send(&router, Method::GET, "/films/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Interstellar");

    let (status, body) = send(&router, Method::GET, "/films/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);

    let (status, _) = send(&router, Method::GET, "/films/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// POST /films
// =============================================================================

#[tokio::test]
async fn test_create() {
    let temp = TempDir::new().unwrap();
    let router = test_router(&temp);

    let (status, body) = send(&router, Method::POST, "/films", Some(dune())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 5);
    assert_eq!(body["title"], "Dune");
    assert!(body.get("description").is_none());

    let (status, body) = send(&router, Method::GET, "/films/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["director"], "Denis Villeneuve");
    assert!(temp.path().join("films.json").exists());
}

#[tokio::test]
async fn test_create_duplicate_is_conflict() {
    let temp = TempDir::new().unwrap();
    let router = test_router(&temp);

    let duplicate = json!({"title": "THE MATRIX", "director": "lana wachowski, lilly wachowski", "duration": 136});
    let (status, body) = send(&router, Method::POST, "/films", Some(duplicate)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 409);
    assert!(!temp.path().join("films.json").exists());
}

#[tokio::test]
async fn test_create_validation() {
    let temp = TempDir::new().unwrap();
    let router = test_router(&temp);

    let cases = [
        json!({"director": "D", "duration": 90}),
        json!({"title": " ", "director": "D", "duration": 90}),
        json!({"title": "T", "director": "D", "duration": -5}),
        json!({"title": "T", "director": "D", "duration": 90, "budget": "lots"}),
        json!(["not", "an", "object"]),
    ];
    for case in cases {
        let (status, body) = send(&router, Method::POST, "/films", Some(case.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", case);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    }

    let (status, _) = send(&router, Method::POST, "/films", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_save_failure_is_500() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, b"").unwrap();
    let router = router_for(FilmStore::new(blocker.join("films.json")));

    let (status, body) = send(&router, Method::POST, "/films", Some(dune())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn test_create_with_no_id_left_is_500() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("films.json");
    DocumentFile::new(&path)
        .save(&[NewFilm::new("Last", "Someone", 90.0).with_id(u64::MAX)])
        .unwrap();
    let before = fs::read(&path).unwrap();
    let router = router_for(FilmStore::new(&path));

    let (status, body) = send(&router, Method::POST, "/films", Some(dune())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(fs::read(&path).unwrap(), before);
}

// =============================================================================
// PATCH /films/:id
// =============================================================================

#[tokio::test]
async fn test_patch() {
    let temp = TempDir::new().unwrap();
    let router = test_router(&temp);

    let (status, body) = send(
        &router,
        Method::PATCH,
        "/films/1",
        Some(json!({"duration": 150, "id": 1000})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["duration"], 150.0);
    assert_eq!(body["title"], "Inception");

    let (status, body) = send(&router, Method::PATCH, "/films/2", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "The Matrix");
}

#[tokio::test]
async fn test_patch_errors() {
    let temp = TempDir::new().unwrap();
    let router = test_router(&temp);

    let (status, _) = send(&router, Method::PATCH, "/films/42", Some(json!({"title": "X"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, Method::PATCH, "/films/1", Some(json!({"duration": 0}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&router, Method::PATCH, "/films/1", Some(json!({"imageUrl": 7}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// PUT /films/:id
// =============================================================================

#[tokio::test]
async fn test_put_unknown_id_creates_with_fresh_id() {
    let temp = TempDir::new().unwrap();
    let router = test_router(&temp);

    let (status, body) = send(&router, Method::PUT, "/films/99", Some(dune())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 5);

    let (status, _) = send(&router, Method::GET, "/films/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_existing_id_replaces() {
    let temp = TempDir::new().unwrap();
    let router = test_router(&temp);

    let body = json!({"title": "The Matrix", "director": "The Wachowskis", "duration": 136});
    let (status, body) = send(&router, Method::PUT, "/films/2", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["director"], "The Wachowskis");
    assert_eq!(body["budget"], 63000000.0);
}

#[tokio::test]
async fn test_put_requires_full_film() {
    let temp = TempDir::new().unwrap();
    let router = test_router(&temp);

    let (status, _) = send(&router, Method::PUT, "/films/2", Some(json!({"title": "Only"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// DELETE /films/:id
// =============================================================================

#[tokio::test]
async fn test_delete() {
    let temp = TempDir::new().unwrap();
    let router = test_router(&temp);

    let (status, body) = send(&router, Method::DELETE, "/films/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Past Lives");

    let (status, _) = send(&router, Method::GET, "/films/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, Method::DELETE, "/films/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, Method::DELETE, "/films/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
