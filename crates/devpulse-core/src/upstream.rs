//! Payloads returned by the upstream data sources, plus the tagged
//! result type optional sources degrade through.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity metadata from the profile source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: DateTime<Utc>,
    pub html_url: String,
}

/// One repository visible to the identity. Source of truth for all
/// repo-derived aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub private: bool,
    pub fork: bool,
    pub language: Option<String>,
    #[serde(default)]
    pub size: u64,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub watchers_count: u64,
    pub open_issues_count: u64,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
}

/// One recent activity event: a type tag and a creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub event_type: String,
    pub created_at: DateTime<Utc>,
}

/// A lightweight commit-search hit. Carries a detail URL but no line
/// stats; those only exist on the individually-fetched record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSearchHit {
    pub url: Option<String>,
}

/// A fully-resolved commit with line-level stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub sha: String,
    pub message: String,
    /// Author timestamp (committer timestamp as a fallback). Absent
    /// records are excluded from churn but still quality-analyzed.
    pub authored_at: Option<DateTime<Utc>>,
    pub additions: u64,
    pub deletions: u64,
}

impl CommitRecord {
    pub fn total_lines(&self) -> u64 {
        self.additions + self.deletions
    }
}

/// Outcome of an optional upstream source. Mandatory sources return a
/// plain `Result`; optional ones degrade to a documented default and
/// carry the reason so tests can assert on degradation paths.
#[derive(Debug, Clone)]
pub enum SourceResult<T> {
    Fetched(T),
    Degraded { fallback: T, reason: String },
}

impl<T> SourceResult<T> {
    pub fn degraded(fallback: T, reason: impl Into<String>) -> Self {
        SourceResult::Degraded {
            fallback,
            reason: reason.into(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, SourceResult::Degraded { .. })
    }

    /// The payload, whether fetched or defaulted.
    pub fn into_value(self) -> T {
        match self {
            SourceResult::Fetched(value) => value,
            SourceResult::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn value(&self) -> &T {
        match self {
            SourceResult::Fetched(value) => value,
            SourceResult::Degraded { fallback, .. } => fallback,
        }
    }
}
