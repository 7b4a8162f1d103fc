//! GitHub client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the upstream client set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// REST API base URL. Overridable for tests and GHE deployments.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// GraphQL endpoint for the contribution-calendar query.
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,
    /// Per-call timeout in seconds. An unresponsive optional source
    /// must not stall the whole pipeline.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent header; the upstream rejects requests without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_graphql_url() -> String {
    "https://api.github.com/graphql".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("devpulse/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            graphql_url: default_graphql_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl GithubConfig {
    /// Point both endpoints at a single base URL (test servers).
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            api_url: base.to_string(),
            graphql_url: format!("{}/graphql", base),
            ..Self::default()
        }
    }
}
