//! Integration tests for the API server.

use std::sync::OnceLock;

use api::config::Config;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            api::server::install_metrics().expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn setup() -> Router {
    setup_with_config(&Config::default())
}

fn setup_with_config(config: &Config) -> Router {
    let state = api::create_default_state(config);
    api::create_app(state, get_metrics_handle())
}

fn setup_documented() -> Router {
    let state = api::create_default_state(&Config::default());
    api::create_documented_app(state, get_metrics_handle())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_root() {
    let (status, json) = send(setup(), get_request("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "running");
    assert_eq!(json["message"], "Welcome to AI Backend API");
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["environment"], "development");
    assert!(json["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_root_reports_configured_environment() {
    let config = Config {
        environment: "staging".to_string(),
        ..Config::default()
    };
    let (_, json) = send(setup_with_config(&config), get_request("/")).await;

    assert_eq!(json["environment"], "staging");
}

#[tokio::test]
async fn test_health_check() {
    let (status, json) = send(setup(), get_request("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_list_items() {
    let (status, json) = send(setup(), get_request("/api/items")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 3);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[2]["description"], "Third example item");
    assert!(items[0].get("created_at").is_none());
}

#[tokio::test]
async fn test_get_item() {
    let (status, json) = send(setup(), get_request("/api/items/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Item 1");
}

#[tokio::test]
async fn test_get_item_not_found() {
    let (status, json) = send(setup(), get_request("/api/items/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Item not found");
}

#[tokio::test]
async fn test_get_item_with_non_integer_id() {
    let (status, json) = send(setup(), get_request("/api/items/abc")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Not found");
}

#[tokio::test]
async fn test_get_item_with_negative_id() {
    let (status, json) = send(setup(), get_request("/api/items/-1")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Not found");
    assert!(json["message"].as_str().is_some());
}

#[tokio::test]
async fn test_create_item() {
    let request = post_json(
        "/api/items",
        &serde_json::json!({ "name": "Test Item", "description": "Test description" }),
    );
    let (status, json) = send(setup(), request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["id"], 4);
    assert_eq!(json["name"], "Test Item");
    assert_eq!(json["description"], "Test description");
    assert!(json["created_at"].as_str().is_some());
}

#[tokio::test]
async fn test_create_item_default_description() {
    let request = post_json("/api/items", &serde_json::json!({ "name": "Bare" }));
    let (status, json) = send(setup(), request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["description"], "No description provided");
}

#[tokio::test]
async fn test_create_item_missing_name() {
    let request = post_json("/api/items", &serde_json::json!({}));
    let (status, json) = send(setup(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Name is required");
}

#[tokio::test]
async fn test_create_item_without_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/items")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(setup(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().is_some());
}

#[tokio::test]
async fn test_create_item_with_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/items")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = send(setup(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().is_some());
    assert!(json["message"].as_str().is_some());
}

#[tokio::test]
async fn test_create_item_with_array_body() {
    let request = post_json("/api/items", &serde_json::json!(["Array Item", "d"]));
    let (status, json) = send(setup(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Name is required");
}

#[tokio::test]
async fn test_create_item_with_null_body() {
    let request = post_json("/api/items", &serde_json::Value::Null);
    let (status, json) = send(setup(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().is_some());
}

#[tokio::test]
async fn test_create_item_with_string_body() {
    let request = post_json("/api/items", &serde_json::json!("Test Item"));
    let (status, json) = send(setup(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().is_some());
}

#[tokio::test]
async fn test_create_item_with_null_name() {
    let request = post_json("/api/items", &serde_json::json!({ "name": null }));
    let (status, json) = send(setup(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Name is required");
}

#[tokio::test]
async fn test_create_item_with_non_string_name() {
    let request = post_json("/api/items", &serde_json::json!({ "name": 5 }));
    let (status, json) = send(setup(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body");
    assert!(json["message"].as_str().is_some());
}

#[tokio::test]
async fn test_create_does_not_store_item() {
    let app = setup();

    let request = post_json("/api/items", &serde_json::json!({ "name": "Ghost" }));
    let (status, _) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(app.clone(), get_request("/api/items/4")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, json) = send(app, get_request("/api/items")).await;
    assert_eq!(json["count"], 3);
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, json) = send(setup(), get_request("/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Not found");
    assert!(json["message"].as_str().is_some());
}

#[tokio::test]
async fn test_method_not_allowed() {
    let request = Request::builder()
        .method("DELETE")
        .uri("/api/items/1")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(setup(), request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_on_api_routes() {
    let request = Request::builder()
        .uri("/api/items")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = setup().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight_on_create() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/items")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = setup().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_no_cors_outside_api() {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = setup().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_panic_becomes_internal_error() {
    async fn boom() -> &'static str {
        panic!("boom")
    }

    let app = api::with_middleware(Router::new().route("/boom", get(boom)));
    let (status, json) = send(app, get_request("/boom")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = setup();
    let (status, _) = send(app.clone(), get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);

    let response = app.oneshot(get_request("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("http_requests_total"));
}

#[tokio::test]
async fn test_plain_app_has_no_docs() {
    let (status, _) = send(setup(), get_request("/docs")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_documented_app_serves_openapi() {
    let (status, json) = send(setup_documented(), get_request("/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/api/items/{id}"]["get"].is_object());
    assert!(json["paths"]["/api/items"]["post"].is_object());
}

#[tokio::test]
async fn test_documented_app_serves_docs_page() {
    let response = setup_documented()
        .oneshot(get_request("/docs"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_documented_app_keeps_api_routes() {
    let (status, json) = send(setup_documented(), get_request("/api/items")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 3);
}
