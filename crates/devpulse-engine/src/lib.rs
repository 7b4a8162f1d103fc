//! The aggregation engine: merges upstream responses into one
//! immutable snapshot and derives the impact metrics.

pub mod aggregate;
pub mod calendar;
pub mod commits;
pub mod metrics;
pub mod pipeline;
pub mod quality;

pub use pipeline::{CacheStatus, StatsService};
