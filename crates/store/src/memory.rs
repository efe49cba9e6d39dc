use crate::error::{Result, StoreError};
use std::collections::HashMap;
use stringstat_analyzer::{identify, new_record};
use stringstat_protocol::AnalysisRecord;

/// Insertion-ordered store of analysis records, indexed by content identity.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<AnalysisRecord>,
    by_id: HashMap<String, usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzes and stores a value. The existence check runs against the
    /// derived identity before anything is persisted, so a duplicate create
    /// never leaves a partial record behind.
    pub fn create(&mut self, value: &str) -> Result<AnalysisRecord> {
        let id = identify(value);
        if self.by_id.contains_key(&id) {
            return Err(StoreError::DuplicateIdentity { id });
        }

        let record = new_record(value);
        self.by_id.insert(id, self.records.len());
        self.records.push(record.clone());
        log::info!("stored record {} ({} total)", record.id, self.records.len());
        Ok(record)
    }

    #[must_use]
    pub fn contains_value(&self, value: &str) -> bool {
        self.by_id.contains_key(&identify(value))
    }

    #[must_use]
    pub fn get_by_value(&self, value: &str) -> Option<&AnalysisRecord> {
        self.by_id
            .get(&identify(value))
            .map(|&index| &self.records[index])
    }

    /// All records in insertion order. This is the store's native ordering,
    /// which the filter evaluator preserves.
    #[must_use]
    pub fn all(&self) -> &[AnalysisRecord] {
        &self.records
    }

    pub fn remove_by_value(&mut self, value: &str) -> Result<AnalysisRecord> {
        let id = identify(value);
        let Some(index) = self.by_id.remove(&id) else {
            return Err(StoreError::NotFound);
        };

        let record = self.records.remove(index);
        for slot in self.by_id.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        log::info!("removed record {} ({} total)", record.id, self.records.len());
        Ok(record)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_derives_identity_from_content() {
        let mut store = MemoryStore::new();
        let record = store.create("abc").unwrap();
        assert_eq!(record.id, identify("abc"));
        assert_eq!(record.id, record.properties.sha256_hash);
    }

    #[test]
    fn duplicate_create_is_rejected_before_persisting() {
        let mut store = MemoryStore::new();
        store.create("abc").unwrap();

        let err = store.create("abc").unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateIdentity {
                id: identify("abc")
            }
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn lookup_by_value_round_trips() {
        let mut store = MemoryStore::new();
        store.create("hello world").unwrap();

        let found = store.get_by_value("hello world").unwrap();
        assert_eq!(found.value, "hello world");
        assert!(store.get_by_value("absent").is_none());
    }

    #[test]
    fn remove_missing_value_is_not_found() {
        let mut store = MemoryStore::new();
        assert_eq!(store.remove_by_value("ghost").unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn remove_preserves_ordering_and_index_integrity() {
        let mut store = MemoryStore::new();
        for value in ["first", "second", "third"] {
            store.create(value).unwrap();
        }

        let removed = store.remove_by_value("second").unwrap();
        assert_eq!(removed.value, "second");

        let values: Vec<&str> = store.all().iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["first", "third"]);
        // Index map still resolves the shifted record.
        assert_eq!(store.get_by_value("third").unwrap().value, "third");
    }

    #[test]
    fn removed_values_can_be_created_again() {
        let mut store = MemoryStore::new();
        store.create("abc").unwrap();
        store.remove_by_value("abc").unwrap();
        assert!(store.create("abc").is_ok());
    }
}
