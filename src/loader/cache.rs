//! Snapshot cache for loaded ledgers
//!
//! An explicit `(snapshot, fetched_at)` pair owned by the caller, replacing
//! any ambient memoization. Data may lag the store by at most the TTL; a
//! refresh replaces the snapshot wholesale, there is no partial
//! invalidation. A successful append should be followed by `invalidate` so
//! the next read hits the store.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::{LedgerError, LedgerResult};
use crate::store::LedgerStore;

use super::{load, LoadOutcome};

/// A cached ledger snapshot with its fetch time
#[derive(Debug, Clone, Default)]
pub struct SnapshotCache {
    entry: Option<(LoadOutcome, DateTime<Utc>)>,
}

impl SnapshotCache {
    /// Create an empty cache; the first access always hits the store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cached snapshot (if any) has outlived the TTL at `now`
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match &self.entry {
            None => true,
            Some((_, fetched_at)) => {
                let age = now.signed_duration_since(*fetched_at);
                age < chrono::TimeDelta::zero()
                    || age.to_std().map(|a| a >= ttl).unwrap_or(true)
            }
        }
    }

    /// Return the cached snapshot, refreshing from the store first when the
    /// cache is empty or stale
    pub fn get_or_refresh(
        &mut self,
        store: &dyn LedgerStore,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> LedgerResult<&LoadOutcome> {
        if self.is_stale(now, ttl) {
            self.refresh(store, now)?;
        }
        match &self.entry {
            Some((outcome, _)) => Ok(outcome),
            // A non-stale cache always holds an entry
            None => Err(LedgerError::SourceUnavailable(
                "snapshot missing after refresh".into(),
            )),
        }
    }

    /// Unconditionally re-read the store, replacing the snapshot wholesale
    pub fn refresh(
        &mut self,
        store: &dyn LedgerStore,
        now: DateTime<Utc>,
    ) -> LedgerResult<&LoadOutcome> {
        let outcome = load(store)?;
        let entry = self.entry.insert((outcome, now));
        Ok(&entry.0)
    }

    /// Drop the snapshot so the next access re-reads the store
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// The time of the last successful fetch, if any
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.entry.as_ref().map(|(_, at)| *at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{LedgerStore, MemoryLedgerStore};
    use chrono::TimeZone;

    fn ttl() -> Duration {
        Duration::from_secs(60)
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn store_with_one_row() -> MemoryLedgerStore {
        let mut store = MemoryLedgerStore::new();
        store
            .append_row(&[
                "2025-01-15".into(),
                "Expense".into(),
                "Groceries".into(),
                "40.50".into(),
                "".into(),
            ])
            .unwrap();
        store
    }

    #[test]
    fn test_empty_cache_is_stale() {
        let cache = SnapshotCache::new();
        assert!(cache.is_stale(at(0), ttl()));
    }

    #[test]
    fn test_fresh_within_ttl() {
        let store = store_with_one_row();
        let mut cache = SnapshotCache::new();

        cache.refresh(&store, at(0)).unwrap();
        assert!(!cache.is_stale(at(59), ttl()));
        assert!(cache.is_stale(at(60), ttl()));
    }

    #[test]
    fn test_get_or_refresh_serves_cached_snapshot() {
        let mut store = store_with_one_row();
        let mut cache = SnapshotCache::new();

        let first = cache.get_or_refresh(&store, at(0), ttl()).unwrap();
        assert_eq!(first.records.len(), 1);

        // Store grows, but the cache still serves the old snapshot
        store
            .append_row(&[
                "2025-01-16".into(),
                "Income".into(),
                "Salary".into(),
                "100.00".into(),
                "".into(),
            ])
            .unwrap();
        let cached = cache.get_or_refresh(&store, at(30), ttl()).unwrap();
        assert_eq!(cached.records.len(), 1);

        // Past the TTL the new row shows up
        let refreshed = cache.get_or_refresh(&store, at(61), ttl()).unwrap();
        assert_eq!(refreshed.records.len(), 2);
    }

    #[test]
    fn test_invalidate_forces_reread() {
        let mut store = store_with_one_row();
        let mut cache = SnapshotCache::new();

        cache.get_or_refresh(&store, at(0), ttl()).unwrap();
        store
            .append_row(&[
                "2025-01-16".into(),
                "Income".into(),
                "Salary".into(),
                "100.00".into(),
                "".into(),
            ])
            .unwrap();

        cache.invalidate();
        assert!(cache.fetched_at().is_none());

        let refreshed = cache.get_or_refresh(&store, at(1), ttl()).unwrap();
        assert_eq!(refreshed.records.len(), 2);
    }

    #[test]
    fn test_failed_refresh_leaves_no_entry() {
        let mut store = MemoryLedgerStore::new();
        store.set_fail_reads(true);

        let mut cache = SnapshotCache::new();
        assert!(cache.refresh(&store, at(0)).is_err());
        assert!(cache.fetched_at().is_none());
        assert!(cache.is_stale(at(0), ttl()));
    }
}
