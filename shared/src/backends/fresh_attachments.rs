use std::{collections::HashSet, hash::Hash};

/// Records that received a field since the engine last reported a native
/// "set" for it.
///
/// Engines whose native set notification also fires on first attachment
/// mark the record on add; the next set for that record is then consumed
/// here instead of reaching `on_set`.
#[derive(Debug)]
pub struct FreshAttachments<E: Eq + Hash> {
    records: HashSet<E>,
}

impl<E: Eq + Hash> Default for FreshAttachments<E> {
    fn default() -> Self {
        Self {
            records: HashSet::new(),
        }
    }
}

impl<E: Eq + Hash> FreshAttachments<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, record: E) {
        self.records.insert(record);
    }

    /// Clears the mark on `record`, returning whether it was set.
    pub fn take(&mut self, record: &E) -> bool {
        self.records.remove(record)
    }

    pub fn is_fresh(&self, record: &E) -> bool {
        self.records.contains(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
