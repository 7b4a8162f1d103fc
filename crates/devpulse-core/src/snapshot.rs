//! The assembled response for one identity at one point in time.
//!
//! Field names and nesting are a wire contract shared with existing
//! dashboard consumers; every struct here serializes to camelCase and
//! must not be reshaped without versioning the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The complete, immutable aggregated response for one identity.
/// Created once per cache miss and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub user: UserSummary,
    pub stats: StatsBlock,
    pub recent_repos: Vec<RecentRepo>,
    pub activity_timeline: Vec<ActivityPoint>,
    pub contribution_calendar: ContributionCalendar,
    pub event_types: Vec<EventTypeCount>,
    pub impact_metrics: ImpactMetrics,
}

/// Identity metadata projected from the profile source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
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

/// Counters and histograms derived from the repository list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsBlock {
    pub total_stars: u64,
    pub total_forks: u64,
    pub forked_repos: u64,
    pub total_repos: u64,
    pub public_repos: u64,
    pub private_repos: u64,
    pub total_watchers: u64,
    pub total_open_issues: u64,
    pub top_languages: Vec<LanguageStat>,
}

/// One language histogram entry: repo count plus cumulative code size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub language: String,
    pub count: u64,
    pub size: u64,
}

/// Thin projection of a repository for the recent-repos listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentRepo {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
    pub is_private: bool,
}

/// One activity-timeline bucket: events counted per calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub date: String,
    pub events: u64,
}

/// One event-type histogram entry, with any trailing "Event" suffix
/// already stripped from the type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeCount {
    #[serde(rename = "type")]
    pub event_type: String,
    pub count: u64,
}

/// Daily contribution-count grid over roughly one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    pub weeks: Vec<CalendarWeek>,
    /// Whether the grid came from the primary calendar query or was
    /// synthesized from events and commits. Not part of the wire
    /// contract; consumers only see the grid itself.
    #[serde(skip)]
    pub fidelity: CalendarFidelity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek {
    pub contribution_days: Vec<CalendarDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub contribution_count: u64,
    pub date: String,
    pub weekday: u32,
}

/// Fidelity of a contribution calendar. The synthesized form is an
/// approximation bounded by the retrieved events and commits, not
/// ground truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CalendarFidelity {
    #[default]
    Primary,
    Synthesized,
}

/// Derived impact metrics: churn, collaboration, and commit quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMetrics {
    pub code_churn: CodeChurn,
    pub collaboration: Collaboration,
    pub quality: QualityMetrics,
}

/// Line-level churn over the analyzed commit set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeChurn {
    pub total_additions: u64,
    pub total_deletions: u64,
    pub net_change: i64,
    pub churn_rate: f64,
    pub retention: f64,
    pub avg_lines_per_commit: u64,
    pub commit_count: u64,
    pub complexity_level: ComplexityLevel,
    pub timeline: Vec<ChurnPoint>,
}

/// One churn-timeline bucket, keyed by the same date format as the
/// activity timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurnPoint {
    pub date: String,
    pub additions: u64,
    pub deletions: u64,
    pub net: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityLevel {
    High,
    Medium,
    Low,
}

/// Weighted composite of review, comment, and authorship activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaboration {
    pub review_count: u64,
    pub review_comments: u64,
    pub issue_comments: u64,
    pub prs_authored: u64,
    pub score: u64,
}

/// Aggregate commit-quality heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    pub overall_score: u64,
    pub grade: QualityGrade,
    pub meaningful_commits: u64,
    pub trivial_commits: u64,
    pub suspicious_commits: u64,
    pub meaningful_ratio: u64,
    pub total_analyzed: u64,
    pub patterns: CommitPatterns,
    pub distribution: QualityDistribution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityGrade {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitPatterns {
    pub substantial_work: u64,
    pub minor_tweaks: u64,
    pub bulk_changes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityDistribution {
    pub high_quality: u64,
    pub medium: u64,
    pub low_quality: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_fidelity_not_serialized() {
        let calendar = ContributionCalendar {
            total_contributions: 1,
            weeks: vec![CalendarWeek {
                contribution_days: vec![CalendarDay {
                    contribution_count: 1,
                    date: "2026-08-30".to_string(),
                    weekday: 0,
                }],
            }],
            fidelity: CalendarFidelity::Synthesized,
        };

        let json = serde_json::to_value(&calendar).expect("serialize");
        assert!(json.get("fidelity").is_none());
        assert_eq!(json["totalContributions"], 1);
        assert_eq!(
            json["weeks"][0]["contributionDays"][0]["contributionCount"],
            1
        );
    }

    #[test]
    fn test_event_type_field_name() {
        let entry = EventTypeCount {
            event_type: "Push".to_string(),
            count: 3,
        };
        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["type"], "Push");
    }

    #[test]
    fn test_grade_wire_names() {
        assert_eq!(
            serde_json::to_value(QualityGrade::NeedsImprovement).unwrap(),
            "Needs Improvement"
        );
        assert_eq!(serde_json::to_value(QualityGrade::Excellent).unwrap(), "Excellent");
    }
}
