//! Wire-contract tests for devpulse-core snapshot types.
//!
//! The response contract is consumed by an existing dashboard; field
//! names and nesting must survive refactors exactly.

use chrono::{TimeZone, Utc};
use devpulse_core::snapshot::*;

fn sample_snapshot() -> Snapshot {
    Snapshot {
        user: UserSummary {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            avatar_url: "https://example.com/a.png".to_string(),
            bio: None,
            public_repos: 8,
            followers: 100,
            following: 9,
            created_at: Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap(),
            html_url: "https://github.com/octocat".to_string(),
        },
        stats: StatsBlock {
            total_stars: 3,
            total_forks: 1,
            forked_repos: 0,
            total_repos: 1,
            public_repos: 1,
            private_repos: 0,
            total_watchers: 3,
            total_open_issues: 0,
            top_languages: vec![LanguageStat {
                language: "Go".to_string(),
                count: 1,
                size: 100,
            }],
        },
        recent_repos: vec![RecentRepo {
            name: "hello".to_string(),
            full_name: "octocat/hello".to_string(),
            description: None,
            language: Some("Go".to_string()),
            stars: 3,
            forks: 1,
            updated_at: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
            html_url: "https://github.com/octocat/hello".to_string(),
            is_private: false,
        }],
        activity_timeline: vec![ActivityPoint {
            date: "Aug 29".to_string(),
            events: 4,
        }],
        contribution_calendar: ContributionCalendar {
            total_contributions: 2,
            weeks: vec![CalendarWeek {
                contribution_days: vec![CalendarDay {
                    contribution_count: 2,
                    date: "2026-08-29".to_string(),
                    weekday: 6,
                }],
            }],
            fidelity: CalendarFidelity::Primary,
        },
        event_types: vec![EventTypeCount {
            event_type: "Push".to_string(),
            count: 4,
        }],
        impact_metrics: ImpactMetrics {
            code_churn: CodeChurn {
                total_additions: 40,
                total_deletions: 35,
                net_change: 5,
                churn_rate: 87.5,
                retention: 12.5,
                avg_lines_per_commit: 75,
                commit_count: 1,
                complexity_level: ComplexityLevel::Low,
                timeline: vec![ChurnPoint {
                    date: "Aug 29".to_string(),
                    additions: 40,
                    deletions: 35,
                    net: 5,
                }],
            },
            collaboration: Collaboration {
                review_count: 2,
                review_comments: 1,
                issue_comments: 3,
                prs_authored: 5,
                score: 4,
            },
            quality: QualityMetrics {
                overall_score: 100,
                grade: QualityGrade::Excellent,
                meaningful_commits: 1,
                trivial_commits: 0,
                suspicious_commits: 0,
                meaningful_ratio: 100,
                total_analyzed: 1,
                patterns: CommitPatterns {
                    substantial_work: 1,
                    minor_tweaks: 0,
                    bulk_changes: 0,
                },
                distribution: QualityDistribution {
                    high_quality: 1,
                    medium: 0,
                    low_quality: 0,
                },
            },
        },
    }
}

#[test]
fn test_snapshot_top_level_keys() {
    let json = serde_json::to_value(sample_snapshot()).expect("serialize");
    for key in [
        "user",
        "stats",
        "recentRepos",
        "activityTimeline",
        "contributionCalendar",
        "eventTypes",
        "impactMetrics",
    ] {
        assert!(json.get(key).is_some(), "missing top-level key {key}");
    }
}

#[test]
fn test_user_and_stats_field_names() {
    let json = serde_json::to_value(sample_snapshot()).expect("serialize");
    assert_eq!(json["user"]["avatarUrl"], "https://example.com/a.png");
    assert_eq!(json["user"]["publicRepos"], 8);
    assert_eq!(json["user"]["htmlUrl"], "https://github.com/octocat");
    assert_eq!(json["stats"]["totalStars"], 3);
    assert_eq!(json["stats"]["forkedRepos"], 0);
    assert_eq!(json["stats"]["privateRepos"], 0);
    assert_eq!(json["stats"]["topLanguages"][0]["language"], "Go");
    assert_eq!(json["stats"]["topLanguages"][0]["size"], 100);
}

#[test]
fn test_impact_metrics_field_names() {
    let json = serde_json::to_value(sample_snapshot()).expect("serialize");
    let churn = &json["impactMetrics"]["codeChurn"];
    assert_eq!(churn["totalAdditions"], 40);
    assert_eq!(churn["netChange"], 5);
    assert_eq!(churn["churnRate"], 87.5);
    assert_eq!(churn["avgLinesPerCommit"], 75);
    assert_eq!(churn["complexityLevel"], "Low");
    assert_eq!(churn["timeline"][0]["net"], 5);

    let collab = &json["impactMetrics"]["collaboration"];
    assert_eq!(collab["reviewCount"], 2);
    assert_eq!(collab["prsAuthored"], 5);

    let quality = &json["impactMetrics"]["quality"];
    assert_eq!(quality["overallScore"], 100);
    assert_eq!(quality["grade"], "Excellent");
    assert_eq!(quality["meaningfulRatio"], 100);
    assert_eq!(quality["totalAnalyzed"], 1);
    assert_eq!(quality["patterns"]["substantialWork"], 1);
    assert_eq!(quality["distribution"]["highQuality"], 1);
}

#[test]
fn test_snapshot_roundtrip() {
    let snapshot = sample_snapshot();
    let json = serde_json::to_string(&snapshot).expect("serialize");
    let parsed: Snapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(snapshot.user, parsed.user);
    assert_eq!(snapshot.stats, parsed.stats);
    assert_eq!(snapshot.impact_metrics, parsed.impact_metrics);
}
