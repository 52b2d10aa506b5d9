/// HTTP surface tests driving the router directly
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use wangari_analytics::config::Config;
use wangari_analytics::handlers::{router, AppState};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Router whose backend is unreachable, so every fetch falls back to mock data.
fn offline_app() -> axum::Router {
    let config = Config {
        backend_base_url: "http://127.0.0.1:1".to_string(),
        auth_timeout: Duration::from_secs(1),
        fetch_timeout: Duration::from_secs(1),
        ..Config::default()
    };
    router(Arc::new(AppState {
        config,
        http: reqwest::Client::new(),
    }))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_root_reports_mode() {
    let (status, body) = get_json(offline_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "Online", "mode": "Live Production Mode"}));

    let flagged = router(Arc::new(AppState {
        config: Config {
            use_mock_data: true,
            ..Config::default()
        },
        http: reqwest::Client::new(),
    }));
    let (_, body) = get_json(flagged, "/").await;
    assert_eq!(body["mode"], "Mock Data Mode");
}

#[tokio::test]
async fn test_dashboard_stats_fall_back_to_mock_dataset() {
    let (status, body) = get_json(offline_app(), "/api/v1/dashboard-stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], json!({"total_reports": 5, "verified_reports": 3}));
    assert_eq!(body["hotspots"]["Karura Forest"], 2);
    assert_eq!(body["crime_stats"]["Illegal Logging"], 2);

    let recent = body["recent_reports"].as_array().unwrap();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[4]["id"], 999);
    // contact and originalMessage are not part of the recent projection
    assert!(recent[0].get("contact").is_none());
    assert!(recent[0].get("originalMessage").is_none());
}

#[tokio::test]
async fn test_map_data_falls_back_to_mock_dataset() {
    let (status, body) = get_json(offline_app(), "/api/v1/map-data").await;

    assert_eq!(status, StatusCode::OK);
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0]["desc"], "Illegal Logging");
    assert!((points[0]["lat"].as_f64().unwrap() - -1.2921).abs() < 1e-9);
    assert!((points[0]["lon"].as_f64().unwrap() - 36.8219).abs() < 1e-9);
}

#[tokio::test]
async fn test_empty_backend_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc123" })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let config = Config {
        backend_base_url: mock_server.uri(),
        ..Config::default()
    };
    let app = router(Arc::new(AppState {
        config,
        http: reqwest::Client::new(),
    }));

    let (status, body) = get_json(app.clone(), "/api/v1/dashboard-stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "No data available"}));

    let (status, body) = get_json(app, "/api/v1/map-data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let (status, body) = get_json(offline_app(), "/api/v2/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No route for /api/v2/nothing"}));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, body) = get_json(offline_app(), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/v1/dashboard-stats").is_some());
    assert!(body["paths"].get("/api/v1/map-data").is_some());
}
