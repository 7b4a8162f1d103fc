//! Port traits (hexagonal architecture).
//!
//! These traits define the interface between the aggregation pipeline
//! and the concrete upstream clients, so the engine can be tested
//! against stubs.

use crate::identity::Identity;
use crate::snapshot::ContributionCalendar;
use crate::upstream::{CommitRecord, CommitSearchHit, EventRecord, Profile, RepoRecord, SourceResult};
use crate::Result;
use async_trait::async_trait;

/// Typed accessors for the upstream data sources.
///
/// Mandatory sources (`profile`, `repositories`) return `Result` and
/// abort the pipeline on failure. Optional sources return
/// `SourceResult` and degrade to a documented default.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// Identity metadata. Mandatory.
    async fn profile(&self, identity: &Identity) -> Result<Profile>;

    /// All repositories visible to the identity, pre-sorted by recency.
    /// Mandatory.
    async fn repositories(&self, identity: &Identity) -> Result<Vec<RepoRecord>>;

    /// Most recent activity events (bounded count). Optional.
    async fn events(&self, identity: &Identity) -> SourceResult<Vec<EventRecord>>;

    /// Commits authored by the identity, sorted by author date
    /// descending. Optional; hits carry no line stats.
    async fn search_commits(&self, identity: &Identity) -> SourceResult<Vec<CommitSearchHit>>;

    /// Resolve one search hit into a full commit record with stats.
    async fn commit_detail(&self, identity: &Identity, url: &str) -> Result<CommitRecord>;

    /// The canonical contribution calendar. Optional; `None` triggers
    /// fallback synthesis.
    async fn contribution_calendar(
        &self,
        identity: &Identity,
    ) -> SourceResult<Option<ContributionCalendar>>;

    /// Count of PRs reviewed by the identity, excluding self-authored.
    /// Optional.
    async fn prs_reviewed(&self, identity: &Identity) -> SourceResult<u64>;

    /// Count of issues commented on by the identity, excluding
    /// self-authored. Optional.
    async fn issues_commented(&self, identity: &Identity) -> SourceResult<u64>;

    /// Count of PRs authored by the identity. Optional.
    async fn prs_authored(&self, identity: &Identity) -> SourceResult<u64>;
}
