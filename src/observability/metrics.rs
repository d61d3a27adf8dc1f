//! Operation counters
//!
//! Counters only increase and reset on process start. Relaxed ordering is
//! enough; readers only need eventually-consistent values.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for the student API
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    requests: AtomicU64,
    saves: AtomicU64,
    deletes: AtomicU64,
    lookups: AtomicU64,
    lookup_misses: AtomicU64,
    listings: AtomicU64,
    store_errors: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an HTTP request of any kind
    pub fn increment_requests(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a successful upsert (save or edit)
    pub fn increment_saves(&self) {
        self.saves.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deletes(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a lookup by id, noting whether it found a record
    pub fn record_lookup(&self, found: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if !found {
            self.lookup_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn increment_listings(&self) {
        self.listings.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_store_errors(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            saves: self.saves.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
            listings: self.listings.load(Ordering::Relaxed),
            store_errors: self.store_errors.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub saves: u64,
    pub deletes: u64,
    pub lookups: u64,
    pub lookup_misses: u64,
    pub listings: u64,
    pub store_errors: u64,
}
