//! The snapshot cache store.

use chrono::{DateTime, Duration, Utc};
use devpulse_core::snapshot::Snapshot;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

struct CacheEntry {
    snapshot: Arc<Snapshot>,
    stored_at: DateTime<Utc>,
}

/// Snapshot store keyed by identity login.
///
/// Entries are served only while younger than the freshness TTL; a
/// stale entry behaves as a miss but may still occupy storage until
/// the eviction sweep that runs inside every `put` removes anything
/// older than the eviction TTL. Snapshots are immutable: hits return
/// the same `Arc` until eviction or overwrite.
///
/// Constructed once at startup and injected into the pipeline.
pub struct SnapshotCache {
    ttl_fresh: Duration,
    ttl_evict: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl SnapshotCache {
    pub fn new(ttl_fresh: Duration, ttl_evict: Duration) -> Self {
        Self {
            ttl_fresh,
            ttl_evict,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch a fresh snapshot, or `None` on miss or staleness.
    pub fn get(&self, key: &str) -> Option<Arc<Snapshot>> {
        self.get_at(key, Utc::now())
    }

    /// Store a snapshot under `key`, then sweep entries past the
    /// eviction TTL so churn across many identities cannot grow the
    /// map without bound.
    pub fn put(&self, key: &str, snapshot: Arc<Snapshot>) {
        self.put_at(key, snapshot, Utc::now());
    }

    /// Drop all entries. Diagnostic operation only.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        let dropped = entries.len();
        entries.clear();
        debug!(dropped, "cache cleared");
    }

    /// Number of stored entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<Arc<Snapshot>> {
        let entries = self.entries.lock().expect("cache lock poisoned");
        let entry = entries.get(key)?;
        if now - entry.stored_at < self.ttl_fresh {
            Some(Arc::clone(&entry.snapshot))
        } else {
            None
        }
    }

    fn put_at(&self, key: &str, snapshot: Arc<Snapshot>, now: DateTime<Utc>) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key.to_string(),
            CacheEntry {
                snapshot,
                stored_at: now,
            },
        );
        let ttl_evict = self.ttl_evict;
        entries.retain(|_, entry| now - entry.stored_at <= ttl_evict);
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(Duration::minutes(5), Duration::minutes(30))
    }
}
