//! In-memory record store, one instance per resource kind.
//!
//! Records live in insertion order behind a `tokio::sync::RwLock`. Ids have the
//! form `"<kind>_<n>"` where `n` comes from a per-store atomic counter that is
//! only advanced while the write lock is held, so ids are unique, 1-based and
//! increase in insertion order even under concurrent appends.
//!
//! Lookups are linear scans. Nothing is ever deleted.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

/// A record that can be held by a [`RecordStore`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Id prefix, e.g. `post` gives `post_1`, `post_2`, ...
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

pub struct RecordStore<T> {
    records: RwLock<Vec<T>>,
    last_seq: AtomicU64,
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        RecordStore {
            records: RwLock::new(Vec::new()),
            last_seq: AtomicU64::new(0),
        }
    }

    /// Assigns the next id to `record`, appends it and returns the stored copy.
    pub async fn append(&self, mut record: T) -> T {
        let mut records = self.records.write().await;
        record.set_id(self.next_id());
        debug!(kind = T::KIND, id = record.id(), "record appended");
        records.push(record.clone());
        record
    }

    /// Appends a batch under a single write lock; ids are consecutive.
    pub async fn append_batch(&self, batch: Vec<T>) -> Vec<T> {
        let mut records = self.records.write().await;
        let mut stored = Vec::with_capacity(batch.len());
        for mut record in batch {
            record.set_id(self.next_id());
            records.push(record.clone());
            stored.push(record);
        }
        debug!(kind = T::KIND, count = stored.len(), "batch appended");
        stored
    }

    /// Snapshot of every record in insertion order.
    pub async fn list_all(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// Applies `update` to the first record whose id equals `id`.
    ///
    /// Returns `false` when no record matches; the store is left untouched and
    /// callers treat that as a silent no-op.
    pub async fn find_and_update<F>(&self, id: &str, update: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                update(record);
                true
            }
            None => {
                debug!(kind = T::KIND, id, "update target not found");
                false
            }
        }
    }

    /// Applies `update` to every record matching `predicate`, returning how many matched.
    pub async fn update_matching<P, F>(&self, predicate: P, mut update: F) -> usize
    where
        P: Fn(&T) -> bool,
        F: FnMut(&mut T),
    {
        let mut records = self.records.write().await;
        let mut matched = 0;
        for record in records.iter_mut().filter(|r| predicate(r)) {
            update(record);
            matched += 1;
        }
        matched
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.records.read().await.iter().filter(|r| predicate(r)).count()
    }

    fn next_id(&self) -> String {
        let n = self.last_seq.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}_{}", T::KIND, n)
    }
}
