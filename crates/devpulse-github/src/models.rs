//! Response envelopes for the upstream endpoints that wrap their
//! payloads. Flat payload types live in devpulse-core.

use chrono::{DateTime, Utc};
use devpulse_core::snapshot::ContributionCalendar;
use devpulse_core::upstream::{CommitRecord, CommitSearchHit};
use serde::Deserialize;

/// `/search/commits` envelope.
#[derive(Debug, Deserialize)]
pub struct CommitSearchResponse {
    #[serde(default)]
    pub items: Vec<CommitSearchHit>,
}

/// `/search/issues?per_page=1` count probe.
#[derive(Debug, Deserialize)]
pub struct SearchCountResponse {
    #[serde(default)]
    pub total_count: u64,
}

/// Individually-fetched commit. Line stats sit at the root level here,
/// not inside `commit`; the search endpoint never includes them.
#[derive(Debug, Deserialize)]
pub struct CommitDetailResponse {
    pub sha: Option<String>,
    pub commit: Option<CommitBody>,
    pub stats: Option<CommitStats>,
}

#[derive(Debug, Deserialize)]
pub struct CommitBody {
    #[serde(default)]
    pub message: String,
    pub author: Option<CommitSignature>,
    pub committer: Option<CommitSignature>,
}

#[derive(Debug, Deserialize)]
pub struct CommitSignature {
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CommitStats {
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
}

impl CommitDetailResponse {
    /// Project into a domain record; responses without an identifier
    /// are dropped by the fetcher.
    pub fn into_record(self) -> Option<CommitRecord> {
        let sha = self.sha?;
        let body = self.commit;
        let authored_at = body
            .as_ref()
            .and_then(|b| b.author.as_ref().and_then(|a| a.date))
            .or_else(|| {
                body.as_ref()
                    .and_then(|b| b.committer.as_ref().and_then(|c| c.date))
            });
        let stats = self.stats.unwrap_or_default();
        Some(CommitRecord {
            sha,
            message: body.map(|b| b.message).unwrap_or_default(),
            authored_at,
            additions: stats.additions,
            deletions: stats.deletions,
        })
    }
}

/// GraphQL envelope for the contribution-calendar query.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    pub data: Option<GraphqlData>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlData {
    pub user: Option<GraphqlUser>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlUser {
    #[serde(rename = "contributionsCollection")]
    pub contributions_collection: Option<ContributionsCollection>,
}

#[derive(Debug, Deserialize)]
pub struct ContributionsCollection {
    #[serde(rename = "contributionCalendar")]
    pub contribution_calendar: Option<ContributionCalendar>,
}

impl GraphqlResponse {
    pub fn into_calendar(self) -> Option<ContributionCalendar> {
        self.data?
            .user?
            .contributions_collection?
            .contribution_calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_detail_into_record() {
        let json = serde_json::json!({
            "sha": "abc123",
            "commit": {
                "message": "Fix parser\n\nlonger body",
                "author": { "date": "2026-08-01T10:00:00Z" },
                "committer": { "date": "2026-08-01T11:00:00Z" },
            },
            "stats": { "additions": 10, "deletions": 4, "total": 14 },
        });
        let detail: CommitDetailResponse = serde_json::from_value(json).unwrap();
        let record = detail.into_record().unwrap();
        assert_eq!(record.sha, "abc123");
        assert_eq!(record.additions, 10);
        assert_eq!(record.deletions, 4);
        assert_eq!(
            record.authored_at.unwrap().to_rfc3339(),
            "2026-08-01T10:00:00+00:00"
        );
    }

    #[test]
    fn test_commit_detail_without_sha_dropped() {
        let detail: CommitDetailResponse =
            serde_json::from_value(serde_json::json!({"sha": null})).unwrap();
        assert!(detail.into_record().is_none());
    }

    #[test]
    fn test_commit_detail_committer_date_fallback() {
        let json = serde_json::json!({
            "sha": "def456",
            "commit": {
                "message": "fix",
                "author": {},
                "committer": { "date": "2026-08-02T00:00:00Z" },
            },
        });
        let record: CommitRecord = serde_json::from_value::<CommitDetailResponse>(json)
            .unwrap()
            .into_record()
            .unwrap();
        assert!(record.authored_at.is_some());
        assert_eq!(record.total_lines(), 0);
    }

    #[test]
    fn test_graphql_calendar_extraction() {
        let json = serde_json::json!({
            "data": { "user": { "contributionsCollection": { "contributionCalendar": {
                "totalContributions": 3,
                "weeks": [ { "contributionDays": [
                    { "contributionCount": 3, "date": "2026-08-29", "weekday": 6 }
                ] } ],
            }}}},
        });
        let envelope: GraphqlResponse = serde_json::from_value(json).unwrap();
        let calendar = envelope.into_calendar().unwrap();
        assert_eq!(calendar.total_contributions, 3);
        assert_eq!(calendar.weeks.len(), 1);
    }

    #[test]
    fn test_graphql_errors_without_data() {
        let json = serde_json::json!({ "errors": [ { "message": "bad scope" } ] });
        let envelope: GraphqlResponse = serde_json::from_value(json).unwrap();
        assert_eq!(envelope.errors.len(), 1);
        assert!(envelope.into_calendar().is_none());
    }
}
