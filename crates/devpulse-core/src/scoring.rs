//! Named thresholds and weights for the commit-quality heuristic and
//! the derived metrics.
//!
//! Every magic number in the scoring algorithm lives here so the
//! heuristic is testable and tunable without touching control flow.

use serde::{Deserialize, Serialize};

/// Scoring configuration for the metrics engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Neutral starting score for every commit.
    #[serde(default = "default_base_score")]
    pub base_score: i32,

    /// Penalty for a commit with zero changed lines (also suspicious).
    #[serde(default = "default_empty_penalty")]
    pub empty_penalty: i32,

    /// Commits below this many changed lines are trivial.
    #[serde(default = "default_trivial_lines")]
    pub trivial_lines: u64,
    #[serde(default = "default_trivial_penalty")]
    pub trivial_penalty: i32,

    /// The ideal size band, inclusive on both ends.
    #[serde(default = "default_ideal_min_lines")]
    pub ideal_min_lines: u64,
    #[serde(default = "default_ideal_max_lines")]
    pub ideal_max_lines: u64,
    #[serde(default = "default_ideal_bonus")]
    pub ideal_bonus: i32,

    /// Commits above this many lines get partial credit as bulk changes.
    #[serde(default = "default_bulk_lines")]
    pub bulk_lines: u64,
    #[serde(default = "default_bulk_bonus")]
    pub bulk_bonus: i32,

    /// Message-length bands (first line of the message, in chars).
    #[serde(default = "default_short_message_len")]
    pub short_message_len: usize,
    #[serde(default = "default_short_message_penalty")]
    pub short_message_penalty: i32,
    #[serde(default = "default_descriptive_min_len")]
    pub descriptive_min_len: usize,
    #[serde(default = "default_descriptive_max_len")]
    pub descriptive_max_len: usize,
    #[serde(default = "default_descriptive_bonus")]
    pub descriptive_bonus: i32,

    /// Boilerplate keywords that mark a small commit as suspicious.
    #[serde(default = "default_ai_keywords")]
    pub ai_keywords: Vec<String>,
    #[serde(default = "default_ai_penalty")]
    pub ai_penalty: i32,
    /// The AI-keyword penalty only applies below this many lines.
    #[serde(default = "default_ai_max_lines")]
    pub ai_max_lines: u64,

    /// Problem-solving keywords that earn a bonus on real changes.
    #[serde(default = "default_problem_keywords")]
    pub problem_keywords: Vec<String>,
    #[serde(default = "default_problem_bonus")]
    pub problem_bonus: i32,
    /// The problem-solving bonus only applies at or above this many lines.
    #[serde(default = "default_problem_min_lines")]
    pub problem_min_lines: u64,

    /// Addition/deletion balance threshold for the refactoring bonus.
    #[serde(default = "default_balance_ratio")]
    pub balance_ratio: f64,
    #[serde(default = "default_balance_min_lines")]
    pub balance_min_lines: u64,
    #[serde(default = "default_balance_bonus")]
    pub balance_bonus: i32,

    /// Aggregate grade thresholds (Excellent / Good / Fair).
    #[serde(default = "default_grade_excellent")]
    pub grade_excellent: u64,
    #[serde(default = "default_grade_good")]
    pub grade_good: u64,
    #[serde(default = "default_grade_fair")]
    pub grade_fair: u64,

    /// Score-distribution bucket bounds: high >= high_bucket,
    /// medium >= medium_bucket, low below.
    #[serde(default = "default_high_bucket")]
    pub high_bucket: u64,
    #[serde(default = "default_medium_bucket")]
    pub medium_bucket: u64,

    /// Average-lines-per-commit bounds for the complexity level.
    #[serde(default = "default_complexity_high_lines")]
    pub complexity_high_lines: u64,
    #[serde(default = "default_complexity_medium_lines")]
    pub complexity_medium_lines: u64,

    /// Collaboration-score weights.
    #[serde(default = "default_review_weight")]
    pub review_weight: f64,
    #[serde(default = "default_review_comment_weight")]
    pub review_comment_weight: f64,
    #[serde(default = "default_issue_comment_weight")]
    pub issue_comment_weight: f64,
    #[serde(default = "default_pr_authored_weight")]
    pub pr_authored_weight: f64,
}

fn default_base_score() -> i32 {
    50
}
fn default_empty_penalty() -> i32 {
    30
}
fn default_trivial_lines() -> u64 {
    5
}
fn default_trivial_penalty() -> i32 {
    15
}
fn default_ideal_min_lines() -> u64 {
    20
}
fn default_ideal_max_lines() -> u64 {
    500
}
fn default_ideal_bonus() -> i32 {
    25
}
fn default_bulk_lines() -> u64 {
    1000
}
fn default_bulk_bonus() -> i32 {
    10
}
fn default_short_message_len() -> usize {
    10
}
fn default_short_message_penalty() -> i32 {
    10
}
fn default_descriptive_min_len() -> usize {
    30
}
fn default_descriptive_max_len() -> usize {
    100
}
fn default_descriptive_bonus() -> i32 {
    15
}
fn default_ai_keywords() -> Vec<String> {
    [
        "copilot",
        "ai generated",
        "auto-generated",
        "automated commit",
        "minor fix",
        "typo fix",
        "formatting only",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
fn default_ai_penalty() -> i32 {
    20
}
fn default_ai_max_lines() -> u64 {
    10
}
fn default_problem_keywords() -> Vec<String> {
    [
        "refactor",
        "optimize",
        "implement",
        "algorithm",
        "fix bug",
        "resolve",
        "enhance",
        "improve performance",
        "feature",
        "add support",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
fn default_problem_bonus() -> i32 {
    20
}
fn default_problem_min_lines() -> u64 {
    10
}
fn default_balance_ratio() -> f64 {
    0.3
}
fn default_balance_min_lines() -> u64 {
    50
}
fn default_balance_bonus() -> i32 {
    10
}
fn default_grade_excellent() -> u64 {
    75
}
fn default_grade_good() -> u64 {
    60
}
fn default_grade_fair() -> u64 {
    45
}
fn default_high_bucket() -> u64 {
    70
}
fn default_medium_bucket() -> u64 {
    40
}
fn default_complexity_high_lines() -> u64 {
    300
}
fn default_complexity_medium_lines() -> u64 {
    100
}
fn default_review_weight() -> f64 {
    1.0
}
fn default_review_comment_weight() -> f64 {
    0.5
}
fn default_issue_comment_weight() -> f64 {
    0.3
}
fn default_pr_authored_weight() -> f64 {
    0.2
}

impl Default for ScoringConfig {
    fn default() -> Self {
        serde_json::from_str("{}").expect("defaults are total")
    }
}
