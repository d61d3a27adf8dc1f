//! Student API Tests
//!
//! Drives the full router in-process: routing, body binding, id forcing on
//! edit, not-found policy, CORS and the observability endpoints.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use rosterdb::http_server::{HttpServer, HttpServerConfig, NotFoundPolicy};
use rosterdb::student::InMemoryStudentStore;

// =============================================================================
// Test Utilities
// =============================================================================

fn router_with(config: HttpServerConfig) -> Router {
    HttpServer::with_store(config, Arc::new(InMemoryStudentStore::new())).router()
}

fn router() -> Router {
    router_with(HttpServerConfig::default())
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn save(router: &Router, body: Value) -> String {
    let (status, bytes) = send(router, Method::POST, "/api/v1/student/save", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    String::from_utf8(bytes).unwrap()
}

fn as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

// =============================================================================
// CRUD Round Trips
// =============================================================================

#[tokio::test]
async fn test_full_lifecycle() {
    let router = router();

    let id = save(&router, json!({"_id": null, "studentname": "Ana"})).await;
    assert!(!id.is_empty());

    let (status, bytes) = send(&router, Method::GET, &format!("/api/v1/student/search/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let found = as_json(&bytes);
    assert_eq!(found["_id"], id.as_str());
    assert_eq!(found["studentname"], "Ana");

    let (status, bytes) = send(
        &router,
        Method::PUT,
        &format!("/api/v1/student/edit/{}", id),
        Some(json!({"_id": "ignored", "studentname": "Ana B"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated = as_json(&bytes);
    assert_eq!(updated["_id"], id.as_str());
    assert_eq!(updated["studentname"], "Ana B");

    let (status, bytes) = send(&router, Method::DELETE, &format!("/api/v1/student/delete/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(bytes.is_empty());

    let (status, bytes) = send(&router, Method::GET, &format!("/api/v1/student/search/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_save_with_given_id_is_searchable() {
    let router = router();

    let id = save(
        &router,
        json!({
            "_id": "s7",
            "studentname": "Ravi",
            "studentaddress": "4 Lake Rd",
            "mobile": "0123456789"
        }),
    )
    .await;
    assert_eq!(id, "s7");

    let (_, bytes) = send(&router, Method::GET, "/api/v1/student/search/s7", None).await;
    let found = as_json(&bytes);
    assert_eq!(found["_id"], "s7");
    assert_eq!(found["studentaddress"], "4 Lake Rd");
    assert_eq!(found["mobile"], "0123456789");
}

#[tokio::test]
async fn test_edit_forces_path_id() {
    let router = router();

    let (status, bytes) = send(
        &router,
        Method::PUT,
        "/api/v1/student/edit/42",
        Some(json!({"_id": "99", "studentname": "Kim"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&bytes)["_id"], "42");

    // Upsert semantics: the record now exists under the path id only
    let (_, bytes) = send(&router, Method::GET, "/api/v1/student/search/42", None).await;
    assert_eq!(as_json(&bytes)["studentname"], "Kim");
    let (_, bytes) = send(&router, Method::GET, "/api/v1/student/search/99", None).await;
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_edit_without_body_id() {
    let router = router();

    let (_, bytes) = send(
        &router,
        Method::PUT,
        "/api/v1/student/edit/abc",
        Some(json!({"studentname": "Lee"})),
    )
    .await;
    assert_eq!(as_json(&bytes)["_id"], "abc");
}

#[tokio::test]
async fn test_delete_unknown_id_succeeds() {
    let router = router();

    let (status, bytes) = send(&router, Method::DELETE, "/api/v1/student/delete/never", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_getall_returns_exactly_saved_ids() {
    let router = router();

    let mut expected = Vec::new();
    for name in ["Ana", "Ben", "Cho", "Dev"] {
        expected.push(save(&router, json!({"studentname": name})).await);
    }

    let (status, bytes) = send(&router, Method::GET, "/api/v1/student/getall", None).await;
    assert_eq!(status, StatusCode::OK);

    let mut ids: Vec<String> = as_json(&bytes)
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["_id"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    expected.sort();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_getall_empty_store() {
    let router = router();

    let (status, bytes) = send(&router, Method::GET, "/api/v1/student/getall", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&bytes), json!([]));
}

#[tokio::test]
async fn test_repeated_save_without_id_creates_new_records() {
    let router = router();

    let a = save(&router, json!({"studentname": "Ana"})).await;
    let b = save(&router, json!({"studentname": "Ana"})).await;
    assert_ne!(a, b);
}

// =============================================================================
// Not-Found Policy
// =============================================================================

#[tokio::test]
async fn test_search_missing_is_empty_by_default() {
    let router = router();

    let (status, bytes) = send(&router, Method::GET, "/api/v1/student/search/ghost", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_search_missing_is_404_with_status_policy() {
    let router = router_with(HttpServerConfig {
        not_found: NotFoundPolicy::Status,
        ..Default::default()
    });

    let (status, bytes) = send(&router, Method::GET, "/api/v1/student/search/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body = as_json(&bytes);
    assert_eq!(body["code"], 404);
    assert_eq!(body["error"], "Student not found: ghost");
}

#[tokio::test]
async fn test_delete_missing_is_ok_with_status_policy() {
    let router = router_with(HttpServerConfig {
        not_found: NotFoundPolicy::Status,
        ..Default::default()
    });

    let (status, _) = send(&router, Method::DELETE, "/api/v1/student/delete/ghost", None).await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Body Binding
// =============================================================================

#[tokio::test]
async fn test_missing_required_name_rejected() {
    let router = router();

    let (status, bytes) = send(&router, Method::POST, "/api/v1/student/save", Some(json!({"mobile": "1"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_json(&bytes)["code"], 400);
}

#[tokio::test]
async fn test_unknown_field_rejected() {
    let router = router();

    let (status, _) = send(
        &router,
        Method::POST,
        "/api/v1/student/save",
        Some(json!({"studentname": "Ana", "grade": "A"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let router = router();

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/v1/student/edit/s1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"studentname\":"))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let router = router();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/student/save")
        .body(Body::from(r#"{"studentname":"Ana"}"#))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Routing, CORS, Observability
// =============================================================================

#[tokio::test]
async fn test_wrong_method_rejected() {
    let router = router();

    let (status, _) = send(&router, Method::GET, "/api/v1/student/save", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let router = router();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/student/getall")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_respects_configured_origins() {
    let router = router_with(HttpServerConfig {
        cors_origins: vec!["http://localhost:3000".to_string()],
        ..Default::default()
    });

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/student/getall")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_health_reports_record_count() {
    let router = router();
    save(&router, json!({"studentname": "Ana"})).await;

    let (status, bytes) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    let body = as_json(&bytes);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["students"], 1);
}

#[tokio::test]
async fn test_metrics_track_operations() {
    let router = router();
    let id = save(&router, json!({"studentname": "Ana"})).await;
    send(&router, Method::GET, &format!("/api/v1/student/search/{}", id), None).await;
    send(&router, Method::GET, "/api/v1/student/search/ghost", None).await;

    let (_, bytes) = send(&router, Method::GET, "/metrics", None).await;
    let metrics = as_json(&bytes);
    assert_eq!(metrics["saves"], 1);
    assert_eq!(metrics["lookups"], 2);
    assert_eq!(metrics["lookup_misses"], 1);
    // save + two searches; the /metrics request itself is counted after it responds
    assert_eq!(metrics["requests"], 3);
}
