//! DevPulse server entrypoint.

use chrono::Duration;
use clap::Parser;
use devpulse_api::routes::create_router;
use devpulse_api::state::AppState;
use devpulse_cache::SnapshotCache;
use devpulse_engine::StatsService;
use devpulse_github::GithubClient;
use devpulse_insight::InsightClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::ServerConfig;

#[derive(Parser)]
#[command(name = "devpulse")]
#[command(author, version, about = "Developer activity dashboard backend", long_about = None)]
struct Cli {
    /// Listen address; overrides the config file.
    #[arg(long)]
    bind: Option<String>,
    /// Path to the YAML configuration file.
    #[arg(long, default_value = "devpulse.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let mut config = ServerConfig::load(&cli.config)?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    // The insight key comes from the environment, never the file.
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        config.insight.api_key = Some(key);
    }

    let github = Arc::new(GithubClient::new(config.github.clone()));
    let cache = Arc::new(SnapshotCache::new(
        Duration::seconds(config.cache_fresh_secs),
        Duration::seconds(config.cache_evict_secs),
    ));
    let stats = Arc::new(StatsService::new(github, cache, config.scoring.clone()));
    let insight = Arc::new(InsightClient::new(config.insight.clone()));

    let app = create_router(Arc::new(AppState::new(stats, insight)));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "devpulse listening");
    axum::serve(listener, app).await?;

    Ok(())
}
