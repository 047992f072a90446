use super::Record;
use crate::shared::list_query::filter::{matches, Searchable};
use crate::shared::list_query::QueryState;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No se encontró el registro \"{0}\"")]
    NotFound(String),

    #[error("Identificador duplicado: \"{0}\"")]
    DuplicateId(String),
}

/// Source of records for the list/detail/edit views.
///
/// The mock store below is the only implementation today; a remote client
/// must provide the same three operations and nothing in the filter or pager
/// code depends on which one is used.
pub trait RecordStore<T: Record + Searchable> {
    /// All records in store order, optionally narrowed by a query
    fn list(&self, filter: Option<&QueryState>) -> Vec<T>;

    /// Resolve exactly one record by identifier
    fn get(&self, id: &str) -> Result<T, StoreError>;

    /// Apply a validated patch and return the updated record
    fn update(&mut self, id: &str, patch: &T::Patch) -> Result<T, StoreError>;
}

/// Records seeded at startup and kept in memory for the session
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryStore<T> {
    records: Vec<T>,
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> InMemoryStore<T> {
    pub fn new(records: Vec<T>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id().to_string()) {
                return Err(StoreError::DuplicateId(record.id().to_string()));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record + Searchable> RecordStore<T> for InMemoryStore<T> {
    fn list(&self, filter: Option<&QueryState>) -> Vec<T> {
        match filter {
            None => self.records.clone(),
            Some(query) => self
                .records
                .iter()
                .filter(|r| matches(*r, query))
                .cloned()
                .collect(),
        }
    }

    fn get(&self, id: &str) -> Result<T, StoreError> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn update(&mut self, id: &str, patch: &T::Patch) -> Result<T, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.apply(patch);
        log::info!("{} {} updated", T::element_name(), id);
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_preorder::aggregate::{Preorder, PreorderPatch};
    use crate::domain::a002_preorder::seed::mock_preorders;

    fn store() -> InMemoryStore<Preorder> {
        InMemoryStore::new(mock_preorders()).unwrap()
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut records = mock_preorders();
        records[1].id = records[0].id.clone();
        assert_eq!(
            InMemoryStore::new(records).unwrap_err(),
            StoreError::DuplicateId("1".to_string())
        );
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = store();
        assert_eq!(store.get("42"), Err(StoreError::NotFound("42".to_string())));
        assert_eq!(store.get("3").unwrap().order_number, "PRE-2024-003");
    }

    #[test]
    fn test_list_with_filter_keeps_store_order_and_source_intact() {
        let store = store();
        let before = store.clone();
        let query = QueryState {
            search_text: "mac".to_string(),
            date_range: None,
        };
        let ids: Vec<String> = store.list(Some(&query)).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["2", "7"]);
        assert_eq!(store, before);
        assert_eq!(store.list(None).len(), 12);
    }

    #[test]
    fn test_update_applies_patch_and_keeps_id() {
        let mut store = store();
        let mut patch = PreorderPatch::from(&store.get("1").unwrap());
        patch.quantity = 3;
        patch.unit_price = 10.0;

        let updated = store.update("1", &patch).unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.total_amount, 30.0);
        assert_eq!(store.get("1").unwrap(), updated);
        assert_eq!(store.len(), 12);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = store();
        let patch = PreorderPatch::from(&store.get("1").unwrap());
        assert!(matches!(store.update("nope", &patch), Err(StoreError::NotFound(_))));
    }
}
