//! Route table and request handlers.

use std::path::PathBuf;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use vigia_core::{Observation, ReportEntry};
use vigia_query::{DashboardStats, ElectionDetail, ElectionSummary, Engine};

use crate::error::ApiError;

/// Shared request state.
#[derive(Clone)]
pub struct AppState {
    /// The aggregation engine.
    pub engine: Engine,
    /// Root directory for report artifacts.
    pub reports_root: PathBuf,
}

/// Builds the full route table.
///
/// The dashboard client is served from another origin, so CORS is fully
/// permissive (read-only service, no credentials to protect). Report
/// artifacts are mounted statically under `/reports`.
pub fn router(engine: Engine, reports_root: PathBuf) -> Router {
    let state = AppState {
        engine,
        reports_root: reports_root.clone(),
    };
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/dashboard/stats", get(dashboard_stats))
        .route("/api/elections", get(list_elections))
        .route("/api/elections/{iso}", get(election_detail))
        .route("/api/observations/latest", get(latest_observations))
        .route("/api/reports", get(list_reports))
        .nest_service("/reports", ServeDir::new(reports_root))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `GET /` — service banner.
async fn root() -> Json<Value> {
    Json(json!({
        "status": "online",
        "system": format!("Vigia API v{}", env!("CARGO_PKG_VERSION")),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// `GET /health` — liveness probe.
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "vigia-api" }))
}

/// `GET /api/dashboard/stats` — top-level KPIs.
async fn dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, ApiError> {
    Ok(Json(state.engine.dashboard_stats().await?))
}

/// `GET /api/elections` — elections under active monitoring.
async fn list_elections(
    State(state): State<AppState>,
) -> Result<Json<Vec<ElectionSummary>>, ApiError> {
    Ok(Json(state.engine.list_active_elections().await?))
}

/// `GET /api/elections/{iso}` — detail view for one election.
async fn election_detail(
    State(state): State<AppState>,
    Path(iso): Path<String>,
) -> Result<Json<ElectionDetail>, ApiError> {
    Ok(Json(state.engine.election_detail(&iso).await?))
}

#[derive(Debug, Deserialize)]
struct LatestParams {
    limit: Option<usize>,
}

/// `GET /api/observations/latest?limit=N` — most recent observations.
async fn latest_observations(
    State(state): State<AppState>,
    Query(params): Query<LatestParams>,
) -> Result<Json<Vec<Observation>>, ApiError> {
    Ok(Json(state.engine.latest_observations(params.limit).await?))
}

/// `GET /api/reports` — the MOEP report catalog.
///
/// The scan is filesystem I/O, so it runs on the blocking pool rather
/// than stalling the executor on a large report directory.
async fn list_reports(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReportEntry>>, ApiError> {
    let root = state.reports_root.clone();
    let reports = tokio::task::spawn_blocking(move || vigia_query::list_reports(&root))
        .await
        .map_err(|e| vigia_core::Error::from(std::io::Error::other(e)))??;
    Ok(Json(reports))
}
