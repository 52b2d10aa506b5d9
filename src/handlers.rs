use crate::analytics;
use crate::backend_client::BackendConnector;
use crate::config::Config;
use crate::errors::AppError;
use crate::geo;
use crate::models::*;
use axum::{extract::State, http::Uri, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Connection pool shared by the per-request connectors.
    pub http: reqwest::Client,
}

impl AppState {
    fn connector(&self) -> BackendConnector {
        BackendConnector::new(&self.config, self.http.clone())
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Wangari Maathai Analytics Middleware"),
    paths(service_status, dashboard_stats, map_data),
    components(schemas(
        ServiceStatus,
        DashboardStats,
        Summary,
        RecentReport,
        MapPoint
    )),
    tags(
        (name = "System Health"),
        (name = "Dashboard Analytics"),
        (name = "Map Data")
    )
)]
pub struct ApiDoc;

/// Builds the full router: API routes, docs, and HTTP middleware.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(service_status))
        .route("/api/v1/dashboard-stats", get(dashboard_stats))
        .route("/api/v1/map-data", get(map_data))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .with_state(state)
        // Read-only API; no request bodies expected
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Liveness check reporting whether mock mode is on.
#[utoipa::path(
    get,
    path = "/",
    tag = "System Health",
    responses((status = 200, description = "Service is up", body = ServiceStatus))
)]
pub async fn service_status(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "Online".to_string(),
        mode: state.config.mode_label().to_string(),
    })
}

/// GET /api/v1/dashboard-stats
///
/// Analytics for the admin dashboard. When there is no data at all the body
/// is `{"error": "No data available"}` with status 200.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard-stats",
    tag = "Dashboard Analytics",
    responses((
        status = 200,
        description = "Dashboard statistics, or {\"error\": \"No data available\"}",
        body = DashboardStats
    ))
)]
pub async fn dashboard_stats(State(state): State<Arc<AppState>>) -> Json<AnalyticsOutcome> {
    tracing::info!("GET /api/v1/dashboard-stats");
    let mut connector = state.connector();
    Json(analytics::calculate_dashboard(&mut connector).await)
}

/// GET /api/v1/map-data
#[utoipa::path(
    get,
    path = "/api/v1/map-data",
    tag = "Map Data",
    responses((status = 200, description = "Coordinates found in report locations", body = [MapPoint]))
)]
pub async fn map_data(State(state): State<Arc<AppState>>) -> Json<Vec<MapPoint>> {
    tracing::info!("GET /api/v1/map-data");
    let mut connector = state.connector();
    let points = geo::fetch_map_points(&mut connector).await;
    tracing::debug!("Extracted {} map points", points.len());
    Json(points)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
