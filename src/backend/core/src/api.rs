//! HTTP interface serving the rendered overview.
//!
//! A deliberately small surface: the HTML page, the grid as JSON, liveness,
//! and Prometheus metrics. Every overview request triggers a fresh
//! collection cycle; no results are cached between requests.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::overview::{render_html, Overview, OverviewService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<OverviewService>,
    pub metrics: PrometheusHandle,
}

/// Build the HTTP router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(overview_page))
        .route("/api/overview", get(overview_json))
        .route("/health", get(health_check))
        .route("/metrics", get(prometheus_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// GET / - the rendered overview table.
async fn overview_page(State(state): State<AppState>) -> Html<String> {
    let overview = state.service.collect().await;
    Html(render_html(&overview))
}

/// GET /api/overview - the finished grid as JSON.
async fn overview_json(State(state): State<AppState>) -> Json<Overview> {
    Json(state.service.collect().await)
}

/// GET /health - liveness.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /metrics - Prometheus exposition.
async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
