//! Identity-keyed snapshot cache with a freshness TTL and a separate,
//! longer staleness-eviction sweep.

mod store;

pub use store::SnapshotCache;
