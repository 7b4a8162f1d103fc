//! Commit detail fetching.
//!
//! Search hits carry no line stats; each one must be resolved
//! individually. The fan-out is bounded and best-effort: individual
//! failures are counted and logged, never fatal to the batch.

use devpulse_core::ports::ActivitySource;
use devpulse_core::upstream::{CommitRecord, CommitSearchHit};
use devpulse_core::Identity;
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

/// How many search hits get resolved into full records.
pub const MAX_DETAILS: usize = 30;
/// In-flight fetch bound.
pub const CONCURRENCY: usize = 8;

/// Resolve up to [`MAX_DETAILS`] search hits into full commit records,
/// preserving the input order (author date descending). Output may be
/// shorter than the input when individual fetches fail.
pub async fn fetch_details(
    source: &dyn ActivitySource,
    identity: &Identity,
    hits: &[CommitSearchHit],
) -> Vec<CommitRecord> {
    let urls: Vec<&str> = hits
        .iter()
        .take(MAX_DETAILS)
        .filter_map(|hit| hit.url.as_deref())
        .collect();
    if urls.is_empty() {
        return Vec::new();
    }
    debug!(count = urls.len(), "resolving commit details");

    let futures: Vec<_> = urls
        .into_iter()
        .map(|url| source.commit_detail(identity, url))
        .collect();
    let results: Vec<_> = stream::iter(futures)
        .buffered(CONCURRENCY)
        .collect()
        .await;

    let mut records = Vec::with_capacity(results.len());
    let mut failed = 0usize;
    for result in results {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                failed += 1;
                debug!(error = %e, "commit detail fetch failed");
            }
        }
    }
    if failed > 0 {
        warn!(failed, resolved = records.len(), "partial commit detail failure");
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use devpulse_core::snapshot::ContributionCalendar;
    use devpulse_core::upstream::{EventRecord, Profile, RepoRecord, SourceResult};
    use devpulse_core::{Error, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub source that fails commit detail for URLs containing "bad".
    struct StubSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ActivitySource for StubSource {
        async fn profile(&self, _: &Identity) -> Result<Profile> {
            unimplemented!("not used")
        }
        async fn repositories(&self, _: &Identity) -> Result<Vec<RepoRecord>> {
            unimplemented!("not used")
        }
        async fn events(&self, _: &Identity) -> SourceResult<Vec<EventRecord>> {
            unimplemented!("not used")
        }
        async fn search_commits(&self, _: &Identity) -> SourceResult<Vec<CommitSearchHit>> {
            unimplemented!("not used")
        }
        async fn commit_detail(&self, _: &Identity, url: &str) -> Result<CommitRecord> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if url.contains("bad") {
                return Err(Error::upstream("commit-detail", "HTTP 500"));
            }
            Ok(CommitRecord {
                sha: url.rsplit('/').next().unwrap_or("").to_string(),
                message: "change".to_string(),
                authored_at: None,
                additions: 1,
                deletions: 0,
            })
        }
        async fn contribution_calendar(
            &self,
            _: &Identity,
        ) -> SourceResult<Option<ContributionCalendar>> {
            unimplemented!("not used")
        }
        async fn prs_reviewed(&self, _: &Identity) -> SourceResult<u64> {
            unimplemented!("not used")
        }
        async fn issues_commented(&self, _: &Identity) -> SourceResult<u64> {
            unimplemented!("not used")
        }
        async fn prs_authored(&self, _: &Identity) -> SourceResult<u64> {
            unimplemented!("not used")
        }
    }

    fn hit(url: &str) -> CommitSearchHit {
        CommitSearchHit {
            url: Some(url.to_string()),
        }
    }

    #[tokio::test]
    async fn test_partial_failures_excluded_in_order() {
        let source = StubSource {
            calls: AtomicUsize::new(0),
        };
        let identity = Identity::new("octocat", "t");
        let hits = vec![hit("c/1"), hit("c/bad"), hit("c/3")];

        let records = fetch_details(&source, &identity, &hits).await;
        let shas: Vec<&str> = records.iter().map(|r| r.sha.as_str()).collect();
        assert_eq!(shas, vec!["1", "3"]);
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_caps_at_thirty_hits() {
        let source = StubSource {
            calls: AtomicUsize::new(0),
        };
        let identity = Identity::new("octocat", "t");
        let hits: Vec<CommitSearchHit> = (0..40).map(|i| hit(&format!("c/{i}"))).collect();

        let records = fetch_details(&source, &identity, &hits).await;
        assert_eq!(records.len(), 30);
        assert_eq!(source.calls.load(Ordering::SeqCst), 30);
    }

    #[tokio::test]
    async fn test_hits_without_urls_skipped() {
        let source = StubSource {
            calls: AtomicUsize::new(0),
        };
        let identity = Identity::new("octocat", "t");
        let hits = vec![CommitSearchHit { url: None }];

        let records = fetch_details(&source, &identity, &hits).await;
        assert!(records.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }
}
