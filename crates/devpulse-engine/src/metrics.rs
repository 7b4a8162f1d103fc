//! Code-churn and collaboration metrics.

use crate::aggregate::{most_recent_chronological, short_date, OrderedTally};
use devpulse_core::scoring::ScoringConfig;
use devpulse_core::snapshot::{ChurnPoint, CodeChurn, Collaboration, ComplexityLevel};
use devpulse_core::upstream::{CommitRecord, EventRecord};

const TIMELINE_BUCKETS: usize = 14;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Default)]
struct ChurnTally {
    additions: u64,
    deletions: u64,
}

/// Sum additions and deletions over commits with a valid author
/// timestamp and derive the churn ratios.
pub fn code_churn(commits: &[CommitRecord], config: &ScoringConfig) -> CodeChurn {
    let mut total_additions = 0u64;
    let mut total_deletions = 0u64;
    let mut commit_count = 0u64;
    let mut buckets: OrderedTally<ChurnTally> = OrderedTally::new();

    for commit in commits {
        let Some(at) = commit.authored_at else {
            continue;
        };
        total_additions += commit.additions;
        total_deletions += commit.deletions;
        commit_count += 1;

        let tally = buckets.entry(&short_date(at));
        tally.additions += commit.additions;
        tally.deletions += commit.deletions;
    }

    let net_change = total_additions as i64 - total_deletions as i64;
    let churn_rate = if total_additions > 0 {
        round1(total_deletions as f64 / total_additions as f64 * 100.0)
    } else {
        0.0
    };
    let retention = if total_additions > 0 {
        round1(net_change as f64 / total_additions as f64 * 100.0)
    } else {
        100.0
    };
    let avg_lines_per_commit = if commit_count > 0 {
        ((total_additions + total_deletions) as f64 / commit_count as f64).round() as u64
    } else {
        0
    };
    let complexity_level = if avg_lines_per_commit > config.complexity_high_lines {
        ComplexityLevel::High
    } else if avg_lines_per_commit > config.complexity_medium_lines {
        ComplexityLevel::Medium
    } else {
        ComplexityLevel::Low
    };

    let points: Vec<ChurnPoint> = buckets
        .into_entries()
        .into_iter()
        .map(|(date, tally)| ChurnPoint {
            date,
            additions: tally.additions,
            deletions: tally.deletions,
            net: tally.additions as i64 - tally.deletions as i64,
        })
        .collect();
    let timeline = most_recent_chronological(points, TIMELINE_BUCKETS);

    CodeChurn {
        total_additions,
        total_deletions,
        net_change,
        churn_rate,
        retention,
        avg_lines_per_commit,
        commit_count,
        complexity_level,
        timeline,
    }
}

/// Review-comment activity from the recent-events feed; the
/// authoritative search counts do not cover these.
pub fn review_comment_count(events: &[EventRecord]) -> u64 {
    events
        .iter()
        .filter(|e| e.event_type == "PullRequestReviewCommentEvent")
        .count() as u64
}

/// Weighted composite of review, comment, and authorship activity.
pub fn collaboration(
    review_count: u64,
    review_comments: u64,
    issue_comments: u64,
    prs_authored: u64,
    config: &ScoringConfig,
) -> Collaboration {
    let score = review_count as f64 * config.review_weight
        + review_comments as f64 * config.review_comment_weight
        + issue_comments as f64 * config.issue_comment_weight
        + prs_authored as f64 * config.pr_authored_weight;

    Collaboration {
        review_count,
        review_comments,
        issue_comments,
        prs_authored,
        score: score.round() as u64,
    }
}
