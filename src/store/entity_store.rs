//! In-memory entity collection with change notification
//!
//! Records are kept in insertion order. Every mutation swaps in a new
//! snapshot and publishes it to subscribers, so a subscriber can tell that
//! the collection changed by the arrival of a new `Arc`.

use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::broadcast;

use super::{Entity, Snapshot};

/// Number of unread change events a slow subscriber may fall behind by
const CHANGE_BUFFER: usize = 64;

/// Insertion-ordered collection of one entity kind
pub struct EntityStore<T: Entity> {
    records: RwLock<Snapshot<T>>,
    changes: broadcast::Sender<Snapshot<T>>,
}

impl<T: Entity> EntityStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store seeded with records (later duplicates of an id win)
    pub fn with_records(records: Vec<T>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_BUFFER);
        Self {
            records: RwLock::new(Arc::new(dedup_by_id(records))),
            changes,
        }
    }

    /// Current snapshot (cheap clone of the shared collection)
    pub fn snapshot(&self) -> Snapshot<T> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// All records in insertion order
    pub fn all(&self) -> Vec<T> {
        self.snapshot().as_ref().clone()
    }

    /// Find a record by id
    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.snapshot().iter().find(|r| r.id() == id).cloned()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.snapshot().iter().any(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Replace the record with the same id in place, or append it
    ///
    /// Returns `true` when the record was newly inserted.
    pub fn upsert(&self, record: T) -> bool {
        let mut inserted = false;
        self.mutate(|records| {
            match records.iter_mut().find(|r| r.id() == record.id()) {
                Some(existing) => *existing = record,
                None => {
                    records.push(record);
                    inserted = true;
                }
            }
            true
        });
        inserted
    }

    /// Remove a record by id; absent ids are a no-op
    pub fn remove(&self, id: &T::Id) -> Option<T> {
        let mut removed = None;
        self.mutate(|records| {
            let Some(pos) = records.iter().position(|r| r.id() == id) else {
                return false;
            };
            removed = Some(records.remove(pos));
            true
        });
        removed
    }

    /// Discard the whole collection in favour of `records`
    pub fn replace_all(&self, records: Vec<T>) {
        let records = dedup_by_id(records);
        self.mutate(move |current| {
            *current = records;
            true
        });
    }

    /// Current snapshot plus a receiver for every later change
    ///
    /// Both are taken under the same lock so no change can slip between them.
    pub fn subscribe(&self) -> (Snapshot<T>, broadcast::Receiver<Snapshot<T>>) {
        let guard = self.records.read().unwrap_or_else(PoisonError::into_inner);
        (guard.clone(), self.changes.subscribe())
    }

    /// Apply `f` to a copy of the collection and publish it if `f` reports a change
    fn mutate(&self, f: impl FnOnce(&mut Vec<T>) -> bool) {
        let mut guard = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = guard.as_ref().clone();
        if !f(&mut next) {
            return;
        }

        let next = Arc::new(next);
        *guard = next.clone();
        // No subscribers is fine
        let _ = self.changes.send(next);
        tracing::trace!(kind = %T::KIND, len = guard.len(), "store changed");
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn dedup_by_id<T: Entity>(records: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(records.len());
    for record in records {
        match out.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record,
            None => out.push(record),
        }
    }
    out
}
