//! Short AI-written takes on a developer profile.
//!
//! Best-effort by design: any failure (missing key, network error,
//! upstream rejection, malformed reply) degrades to a canned line so
//! the caller never has to handle an insight error.

mod client;

pub use client::{InsightClient, InsightConfig, StatsDigest, FALLBACK_INSIGHT};
