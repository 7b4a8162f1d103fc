//! Liveness and readiness probes.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "devpulse",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness includes the snapshot-cache occupancy, which is the only
/// state this service holds.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyResponse {
    pub status: &'static str,
    pub cached_snapshots: usize,
}

pub async fn ready(State(state): State<Arc<AppState>>) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ready",
        cached_snapshots: state.stats.cache().len(),
    })
}
