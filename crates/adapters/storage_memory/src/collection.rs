//! Ordered record collection.
//!
//! Insertion order is listing order. Lookups report absence with `None`,
//! never with a sentinel index.

use petstore_domain::id::{Record, RecordId};

/// An ordered sequence of records with unique ids.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T: Record> Collection<T> {
    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record at the end.
    pub fn append(&mut self, record: T) {
        self.records.push(record);
    }

    #[must_use]
    pub fn find_by_id(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    #[must_use]
    pub fn find_index_by_id(&self, id: T::Id) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Records matching `predicate`, in order.
    pub fn filter_by<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: Fn(&T) -> bool,
    {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Remove and return the record at `index`, shifting later records down.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.records.len()).then(|| self.records.remove(index))
    }

    /// Swap in `record` at `index`, returning the previous record.
    pub fn replace_at(&mut self, index: usize, record: T) -> Option<T> {
        self.records
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, record))
    }

    /// The id a new record receives: one past the largest id, or
    /// [`RecordId::FIRST`] for an empty collection. `None` when the largest
    /// id has no successor.
    #[must_use]
    pub fn next_id(&self) -> Option<T::Id> {
        self.records
            .iter()
            .map(|record| record.id())
            .max()
            .map_or(Some(<T::Id as RecordId>::FIRST), RecordId::successor)
    }
}
