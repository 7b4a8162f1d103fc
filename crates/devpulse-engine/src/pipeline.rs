//! The stats service: cache lookup, concurrent upstream fan-out,
//! aggregation, and snapshot assembly.

use crate::{aggregate, calendar, commits, metrics, quality};
use chrono::Utc;
use devpulse_cache::SnapshotCache;
use devpulse_core::ports::ActivitySource;
use devpulse_core::scoring::ScoringConfig;
use devpulse_core::snapshot::{ImpactMetrics, Snapshot, UserSummary};
use devpulse_core::{Error, Identity, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Whether a snapshot came from the cache or a fresh pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

/// Computes and caches activity snapshots.
///
/// Constructed once at startup with its cache and upstream source
/// injected. Concurrent misses for the same identity collapse into one
/// upstream fetch via a per-key flight guard.
pub struct StatsService {
    source: Arc<dyn ActivitySource>,
    cache: Arc<SnapshotCache>,
    scoring: ScoringConfig,
    flights: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl StatsService {
    pub fn new(
        source: Arc<dyn ActivitySource>,
        cache: Arc<SnapshotCache>,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            source,
            cache,
            scoring,
            flights: Mutex::new(HashMap::new()),
        }
    }

    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    /// Resolve the login behind a bearer token, then serve the snapshot
    /// keyed by it. This is the entry point for callers that only hold
    /// a credential.
    pub async fn snapshot_for_token(
        &self,
        token: &str,
        skip_cache: bool,
    ) -> Result<(Arc<Snapshot>, CacheStatus)> {
        if token.is_empty() {
            return Err(Error::Unauthorized);
        }
        let probe = Identity::new("", token);
        let profile = self.source.profile(&probe).await?;
        self.snapshot(&Identity::new(profile.login, token), skip_cache)
            .await
    }

    /// Serve a fresh snapshot for the identity, recomputing on miss.
    /// `skip_cache` bypasses the cache read but still writes the
    /// recomputed snapshot back.
    pub async fn snapshot(
        &self,
        identity: &Identity,
        skip_cache: bool,
    ) -> Result<(Arc<Snapshot>, CacheStatus)> {
        if identity.token().is_empty() {
            return Err(Error::Unauthorized);
        }

        let key = identity.cache_key();
        if !skip_cache {
            if let Some(snapshot) = self.cache.get(key) {
                debug!(login = key, "serving cached snapshot");
                return Ok((snapshot, CacheStatus::Hit));
            }
        }

        let flight = self.flight_guard(key).await;
        let result = async {
            let _guard = flight.lock().await;
            // A concurrent miss may have landed the snapshot while we
            // waited on the guard.
            if !skip_cache {
                if let Some(snapshot) = self.cache.get(key) {
                    debug!(login = key, "serving snapshot landed by concurrent fetch");
                    return Ok((snapshot, CacheStatus::Hit));
                }
            }

            info!(login = key, "computing fresh snapshot");
            let snapshot = Arc::new(self.compute(identity).await?);
            self.cache.put(key, Arc::clone(&snapshot));
            Ok((snapshot, CacheStatus::Miss))
        }
        .await;

        self.flights.lock().await.remove(key);
        result
    }

    async fn flight_guard(&self, key: &str) -> Arc<Mutex<()>> {
        let mut flights = self.flights.lock().await;
        flights
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// One full pipeline run: concurrent fan-out, mandatory join,
    /// commit details, aggregation, metrics, assembly.
    async fn compute(&self, identity: &Identity) -> Result<Snapshot> {
        let source = self.source.as_ref();
        let (profile, repos, events, hits, primary_calendar, reviewed, commented, authored) = tokio::join!(
            source.profile(identity),
            source.repositories(identity),
            source.events(identity),
            source.search_commits(identity),
            source.contribution_calendar(identity),
            source.prs_reviewed(identity),
            source.issues_commented(identity),
            source.prs_authored(identity),
        );

        // Mandatory sources abort; everything else already degraded.
        let profile = profile?;
        let repos = repos?;
        let events = events.into_value();
        let hits = hits.into_value();

        let commits = commits::fetch_details(source, identity, &hits).await;

        let stats = aggregate::aggregate_repos(&repos);
        let recent_repos = aggregate::recent_repos(&repos);
        let activity_timeline = aggregate::activity_timeline(&events);
        let event_types = aggregate::event_types(&events);
        let contribution_calendar = calendar::resolve(
            primary_calendar.into_value(),
            &events,
            &commits,
            Utc::now(),
        );

        let code_churn = metrics::code_churn(&commits, &self.scoring);
        let quality = quality::quality_metrics(&commits, &self.scoring);
        let collaboration = metrics::collaboration(
            reviewed.into_value(),
            metrics::review_comment_count(&events),
            commented.into_value(),
            authored.into_value(),
            &self.scoring,
        );

        info!(
            login = identity.login,
            repos = repos.len(),
            events = events.len(),
            commits = commits.len(),
            "snapshot assembled"
        );

        Ok(Snapshot {
            user: UserSummary {
                login: profile.login,
                name: profile.name,
                avatar_url: profile.avatar_url,
                bio: profile.bio,
                public_repos: profile.public_repos,
                followers: profile.followers,
                following: profile.following,
                created_at: profile.created_at,
                html_url: profile.html_url,
            },
            stats,
            recent_repos,
            activity_timeline,
            contribution_calendar,
            event_types,
            impact_metrics: ImpactMetrics {
                code_churn,
                collaboration,
                quality,
            },
        })
    }
}
