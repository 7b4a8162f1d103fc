//! Cache control surface.

use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::info;

use crate::state::AppState;

pub async fn clear_cache(State(state): State<Arc<AppState>>) -> StatusCode {
    state.stats.cache().clear();
    info!("snapshot cache cleared");
    StatusCode::NO_CONTENT
}
