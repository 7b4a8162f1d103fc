//! Application state shared across handlers.

use devpulse_engine::StatsService;
use devpulse_insight::InsightClient;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub stats: Arc<StatsService>,
    pub insight: Arc<InsightClient>,
}

impl AppState {
    pub fn new(stats: Arc<StatsService>, insight: Arc<InsightClient>) -> Self {
        Self { stats, insight }
    }
}
