//! The insight endpoint: posts the stats block to the AI collaborator.

use axum::Json;
use axum::extract::State;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use devpulse_insight::StatsDigest;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::handlers::{unauthorized, ErrorResponse};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct InsightRequest {
    pub stats: InsightStats,
}

/// The subset of the stats block the prompt is built from.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightStats {
    #[serde(default)]
    pub total_repos: u64,
    #[serde(default)]
    pub total_stars: u64,
    #[serde(default)]
    pub top_languages: Vec<LanguageEntry>,
}

#[derive(Deserialize)]
pub struct LanguageEntry {
    pub language: String,
}

#[derive(Serialize)]
pub struct InsightResponse {
    pub insight: String,
}

pub async fn generate_insight(
    State(state): State<Arc<AppState>>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    Json(request): Json<InsightRequest>,
) -> Result<Json<InsightResponse>, ErrorResponse> {
    if bearer.is_none() {
        return Err(unauthorized());
    }

    let digest = StatsDigest {
        total_repos: request.stats.total_repos,
        total_stars: request.stats.total_stars,
        top_languages: request
            .stats
            .top_languages
            .into_iter()
            .map(|entry| entry.language)
            .collect(),
    };

    // Generation never fails; the worst case is the fallback line.
    let insight = state.insight.generate(&digest).await;
    Ok(Json(InsightResponse { insight }))
}
