//! Server configuration.

use devpulse_core::scoring::ScoringConfig;
use devpulse_github::GithubConfig;
use devpulse_insight::InsightConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level YAML configuration. Every field has a default, so an
/// absent file yields a runnable server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// How long a cached snapshot is served as fresh, in seconds.
    #[serde(default = "default_cache_fresh_secs")]
    pub cache_fresh_secs: i64,
    /// How long a stale snapshot may occupy storage, in seconds.
    #[serde(default = "default_cache_evict_secs")]
    pub cache_evict_secs: i64,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub insight: InsightConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_cache_fresh_secs() -> i64 {
    5 * 60
}

fn default_cache_evict_secs() -> i64 {
    30 * 60
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            cache_fresh_secs: default_cache_fresh_secs(),
            cache_evict_secs: default_cache_evict_secs(),
            github: GithubConfig::default(),
            insight: InsightConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file; a missing file falls back
    /// to the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mapping_yields_defaults() {
        let config: ServerConfig = serde_yaml::from_str("{}").expect("parse");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.cache_fresh_secs, 300);
        assert_eq!(config.cache_evict_secs, 1800);
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert!(config.insight.api_key.is_none());
    }

    #[test]
    fn test_partial_override() {
        let yaml = "bind_addr: 127.0.0.1:9100\ngithub:\n  timeout_secs: 3\n";
        let config: ServerConfig = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(config.bind_addr, "127.0.0.1:9100");
        assert_eq!(config.github.timeout_secs, 3);
        // Untouched sections keep their defaults.
        assert_eq!(config.cache_fresh_secs, 300);
        assert_eq!(config.scoring.base_score, 50);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = ServerConfig::load(Path::new("/nonexistent/devpulse.yaml")).expect("load");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }
}
