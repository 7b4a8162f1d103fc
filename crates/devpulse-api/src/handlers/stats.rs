//! The stats endpoint: bearer token in, snapshot JSON out.

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use devpulse_core::snapshot::Snapshot;
use devpulse_engine::CacheStatus;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::handlers::{error_response, unauthorized, ErrorResponse};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StatsParams {
    #[serde(default)]
    pub nocache: Option<String>,
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    Query(params): Query<StatsParams>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let Some(TypedHeader(auth)) = bearer else {
        return Err(unauthorized());
    };
    let skip_cache = params.nocache.as_deref() == Some("1");

    let (snapshot, status) = state
        .stats
        .snapshot_for_token(auth.token(), skip_cache)
        .await
        .map_err(error_response)?;

    let cache_header = match status {
        CacheStatus::Hit => "HIT",
        CacheStatus::Miss => "MISS",
    };
    debug!(cache = cache_header, login = %snapshot.user.login, "serving stats");

    let mut headers = HeaderMap::new();
    headers.insert("x-cache", HeaderValue::from_static(cache_header));
    if status == CacheStatus::Miss {
        // Client-side TTL mirrors the server-side freshness window.
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("private, max-age=300"),
        );
    }

    Ok((headers, Json(Snapshot::clone(&snapshot))))
}
