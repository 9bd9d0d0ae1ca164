//! Record Store
//!
//! Ordered in-memory collections backing each page region's feed.
//! One store instance is constructed per page region and handed to the
//! code that renders or mutates it; nothing here is module-global.

use std::cell::Cell;

use chrono::Utc;

/// Records held in a [`RecordStore`] expose a unique integer id.
pub trait HasId {
    fn id(&self) -> u64;
}

/// Mints unique, monotonically increasing record ids.
///
/// Ids start from the current wall-clock milliseconds so that comparing
/// them numerically reflects creation order. Two ids minted within the
/// same millisecond still come out distinct.
#[derive(Debug, Default)]
pub struct IdGen {
    last: Cell<u64>,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id, never repeating an earlier one.
    pub fn next_id(&self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.last.get() + 1);
        self.last.set(id);
        id
    }
}

/// Ordered collection of records, newest first.
///
/// Display order always mirrors store order; the owning view rebuilds
/// its whole list from [`RecordStore::all`] after every mutation.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: HasId> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a record. Never fails; there is no capacity bound.
    pub fn insert_front(&mut self, record: T) {
        self.records.insert(0, record);
    }

    /// Removes the first record whose id matches.
    ///
    /// Returns whether a removal occurred. An absent id leaves the
    /// store untouched and returns `false`; that is not an error.
    pub fn delete_by_id(&mut self, id: u64) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Read-only snapshot, in store order.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u64,
        label: &'static str,
    }

    impl HasId for Item {
        fn id(&self) -> u64 {
            self.id
        }
    }

    fn item(id: u64, label: &'static str) -> Item {
        Item { id, label }
    }

    #[test]
    fn insert_front_reads_back_in_reverse_insertion_order() {
        let mut store = RecordStore::new();
        store.insert_front(item(1, "first"));
        store.insert_front(item(2, "second"));
        store.insert_front(item(3, "third"));

        let labels: Vec<_> = store.all().iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["third", "second", "first"]);
    }

    #[test]
    fn delete_by_id_removes_and_reports() {
        let mut store = RecordStore::new();
        store.insert_front(item(1, "a"));
        store.insert_front(item(2, "b"));

        assert!(store.delete_by_id(1));
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].id, 2);
    }

    #[test]
    fn delete_absent_id_is_a_silent_no_op() {
        let mut store = RecordStore::new();
        store.insert_front(item(1, "a"));
        store.insert_front(item(2, "b"));
        let before = store.all().to_vec();

        assert!(!store.delete_by_id(99));
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn delete_to_empty_reports_empty() {
        let mut store = RecordStore::new();
        store.insert_front(item(7, "only"));
        assert!(!store.is_empty());

        assert!(store.delete_by_id(7));
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }

    #[test]
    fn id_gen_is_unique_and_increasing() {
        let ids = IdGen::new();
        let mut minted = Vec::new();
        for _ in 0..100 {
            minted.push(ids.next_id());
        }

        for pair in minted.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}
