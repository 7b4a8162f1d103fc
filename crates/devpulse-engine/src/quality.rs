//! The commit-quality heuristic: a 0-100 score per commit plus the
//! aggregate quality metrics.

use devpulse_core::scoring::ScoringConfig;
use devpulse_core::snapshot::{
    CommitPatterns, QualityDistribution, QualityGrade, QualityMetrics,
};
use devpulse_core::upstream::CommitRecord;

/// Outcome of scoring one commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitScore {
    pub score: u64,
    pub suspicious: bool,
    pub category: SizeCategory,
}

/// Which size band the commit fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    Empty,
    Trivial,
    /// The ideal band: substantial work.
    Substantial,
    /// Oversized but still real work.
    Bulk,
    /// Small but real (between trivial and ideal).
    Small,
}

impl SizeCategory {
    fn is_meaningful(self) -> bool {
        matches!(self, SizeCategory::Substantial | SizeCategory::Bulk | SizeCategory::Small)
    }
}

fn contains_any(message: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| message.contains(kw.as_str()))
}

/// Score one commit. Starts neutral; size, message quality, keyword
/// signals, and addition/deletion balance adjust it; the result is
/// clamped to 0-100. A commit is suspicious at most once no matter how
/// many penalty rules fired.
pub fn score_commit(commit: &CommitRecord, config: &ScoringConfig) -> CommitScore {
    let total_lines = commit.total_lines();
    let mut score = config.base_score;
    let mut suspicious = false;

    let category = if total_lines == 0 {
        score -= config.empty_penalty;
        suspicious = true;
        SizeCategory::Empty
    } else if total_lines < config.trivial_lines {
        score -= config.trivial_penalty;
        SizeCategory::Trivial
    } else if total_lines >= config.ideal_min_lines && total_lines <= config.ideal_max_lines {
        score += config.ideal_bonus;
        SizeCategory::Substantial
    } else if total_lines > config.bulk_lines {
        score += config.bulk_bonus;
        SizeCategory::Bulk
    } else {
        SizeCategory::Small
    };

    let first_line_len = commit.message.lines().next().unwrap_or("").chars().count();
    if first_line_len < config.short_message_len {
        score -= config.short_message_penalty;
    } else if first_line_len >= config.descriptive_min_len
        && first_line_len <= config.descriptive_max_len
    {
        score += config.descriptive_bonus;
    }

    let message = commit.message.to_lowercase();
    if contains_any(&message, &config.ai_keywords) && total_lines < config.ai_max_lines {
        score -= config.ai_penalty;
        suspicious = true;
    }
    if contains_any(&message, &config.problem_keywords) && total_lines >= config.problem_min_lines {
        score += config.problem_bonus;
    }

    // Good refactoring removes about as much as it adds.
    let balance = commit.additions.min(commit.deletions) as f64
        / commit.additions.max(commit.deletions).max(1) as f64;
    if balance > config.balance_ratio && total_lines >= config.balance_min_lines {
        score += config.balance_bonus;
    }

    CommitScore {
        score: score.clamp(0, 100) as u64,
        suspicious,
        category,
    }
}

/// Aggregate the per-commit scores into the quality block.
pub fn quality_metrics(commits: &[CommitRecord], config: &ScoringConfig) -> QualityMetrics {
    let mut meaningful = 0;
    let mut trivial = 0;
    let mut suspicious = 0;
    let mut patterns = CommitPatterns {
        substantial_work: 0,
        minor_tweaks: 0,
        bulk_changes: 0,
    };
    let mut scores = Vec::with_capacity(commits.len());

    for commit in commits {
        let result = score_commit(commit, config);
        if result.category.is_meaningful() {
            meaningful += 1;
        }
        match result.category {
            SizeCategory::Trivial => {
                trivial += 1;
                patterns.minor_tweaks += 1;
            }
            SizeCategory::Substantial => patterns.substantial_work += 1,
            SizeCategory::Bulk => patterns.bulk_changes += 1,
            SizeCategory::Empty | SizeCategory::Small => {}
        }
        if result.suspicious {
            suspicious += 1;
        }
        scores.push(result.score);
    }

    let analyzed = scores.len() as u64;
    let overall_score = if analyzed > 0 {
        (scores.iter().sum::<u64>() as f64 / analyzed as f64).round() as u64
    } else {
        0
    };

    let grade = if overall_score >= config.grade_excellent {
        QualityGrade::Excellent
    } else if overall_score >= config.grade_good {
        QualityGrade::Good
    } else if overall_score >= config.grade_fair {
        QualityGrade::Fair
    } else {
        QualityGrade::NeedsImprovement
    };

    let meaningful_ratio = if analyzed > 0 {
        (meaningful as f64 / analyzed as f64 * 100.0).round() as u64
    } else {
        0
    };

    let distribution = QualityDistribution {
        high_quality: scores.iter().filter(|&&s| s >= config.high_bucket).count() as u64,
        medium: scores
            .iter()
            .filter(|&&s| s >= config.medium_bucket && s < config.high_bucket)
            .count() as u64,
        low_quality: scores.iter().filter(|&&s| s < config.medium_bucket).count() as u64,
    };

    QualityMetrics {
        overall_score,
        grade,
        meaningful_commits: meaningful,
        trivial_commits: trivial,
        suspicious_commits: suspicious,
        meaningful_ratio,
        total_analyzed: analyzed,
        patterns,
        distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(message: &str, additions: u64, deletions: u64) -> CommitRecord {
        CommitRecord {
            sha: "abc".to_string(),
            message: message.to_string(),
            authored_at: None,
            additions,
            deletions,
        }
    }

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    #[test]
    fn test_trivial_commit_with_lazy_message() {
        // 1 line < 5 => -15; "fix" < 10 chars => -10.
        let result = score_commit(&commit("fix", 1, 0), &config());
        assert_eq!(result.score, 25);
        assert_eq!(result.category, SizeCategory::Trivial);
        assert!(!result.suspicious);
    }

    #[test]
    fn test_descriptive_refactor_clamps_at_100() {
        // 75 lines in the ideal band => +25; 57-char message => +15;
        // "refactor" keyword with >= 10 lines => +20; balance 0.875 but
        // total < 50 lines so no balance bonus. 110 clamps to 100.
        let message = "Refactor authentication module for clarity and testability";
        let result = score_commit(&commit(message, 40, 35), &config());
        assert_eq!(result.score, 100);
        assert_eq!(result.category, SizeCategory::Substantial);
    }

    #[test]
    fn test_empty_commit_is_suspicious() {
        let result = score_commit(&commit("chore: empty marker commit", 0, 0), &config());
        assert_eq!(result.score, 20);
        assert!(result.suspicious);
        assert_eq!(result.category, SizeCategory::Empty);
    }

    #[test]
    fn test_balance_bonus_needs_fifty_lines() {
        // 60/40: ideal band +25, descriptive +15, balance 0.67 > 0.3
        // with 100 lines => +10.
        let message = "Rework storage layout to cut duplicate rows";
        let result = score_commit(&commit(message, 60, 40), &config());
        assert_eq!(result.score, 100);

        // Same shape under 50 lines loses the bonus.
        let result = score_commit(&commit(message, 24, 16), &config());
        assert_eq!(result.score, 90);
    }

    #[test]
    fn test_ai_boilerplate_small_commit_penalized_once() {
        // 2 lines: trivial -15, "typo fix" is both a short message (-10
        // for < 10 chars) and an AI keyword with < 10 lines (-20).
        let result = score_commit(&commit("typo fix", 1, 1), &config());
        assert_eq!(result.score, 5);
        assert!(result.suspicious);

        let metrics = quality_metrics(&[commit("typo fix", 1, 1)], &config());
        assert_eq!(metrics.suspicious_commits, 1);
    }

    #[test]
    fn test_bulk_change_gets_partial_credit() {
        let result = score_commit(&commit("Regenerate all fixtures after schema change", 1500, 100), &config());
        // bulk +10, descriptive +15, balance 0.067 no bonus.
        assert_eq!(result.score, 75);
        assert_eq!(result.category, SizeCategory::Bulk);
    }

    #[test]
    fn test_small_but_real_commit_is_meaningful() {
        let metrics = quality_metrics(&[commit("Adjust retry backoff", 6, 2)], &config());
        assert_eq!(metrics.meaningful_commits, 1);
        assert_eq!(metrics.trivial_commits, 0);
        assert_eq!(metrics.patterns.substantial_work, 0);
    }

    #[test]
    fn test_aggregate_mean_and_grade() {
        let commits = vec![commit("fix", 1, 0), commit("fix", 1, 0)];
        let metrics = quality_metrics(&commits, &config());
        assert_eq!(metrics.overall_score, 25);
        assert_eq!(metrics.grade, QualityGrade::NeedsImprovement);
        assert_eq!(metrics.total_analyzed, 2);
    }

    #[test]
    fn test_distribution_sums_to_analyzed() {
        let commits = vec![
            commit("fix", 1, 0),
            commit("Refactor authentication module for clarity and testability", 40, 35),
            commit("chore", 0, 0),
            commit("Adjust retry backoff", 6, 2),
        ];
        let metrics = quality_metrics(&commits, &config());
        let total = metrics.distribution.high_quality
            + metrics.distribution.medium
            + metrics.distribution.low_quality;
        assert_eq!(total, metrics.total_analyzed);
    }

    #[test]
    fn test_empty_set_scores_zero() {
        let metrics = quality_metrics(&[], &config());
        assert_eq!(metrics.overall_score, 0);
        assert_eq!(metrics.meaningful_ratio, 0);
        assert_eq!(metrics.grade, QualityGrade::NeedsImprovement);
    }
}
