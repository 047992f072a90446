//! Record stores shared by every page
//!
//! Both stores are seeded once at startup and live for the whole session;
//! edits made in the edit views are visible in the lists and detail views
//! until the page is reloaded.

use contracts::domain::a001_request::{mock_requests, Request};
use contracts::domain::a002_preorder::{mock_preorders, Preorder};
use contracts::domain::common::{InMemoryStore, Record, RecordStore, StoreError};
use contracts::shared::list_query::Searchable;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppStores {
    pub requests: RwSignal<InMemoryStore<Request>>,
    pub preorders: RwSignal<InMemoryStore<Preorder>>,
}

impl AppStores {
    pub fn seeded() -> Self {
        Self {
            requests: RwSignal::new(seed_store(mock_requests())),
            preorders: RwSignal::new(seed_store(mock_preorders())),
        }
    }
}

fn seed_store<T: Record>(records: Vec<T>) -> InMemoryStore<T> {
    match InMemoryStore::new(records) {
        Ok(store) => {
            log::debug!("Seeded {} store with {} records", T::list_name(), store.len());
            store
        }
        Err(e) => {
            log::error!("Could not seed {} store: {}", T::list_name(), e);
            InMemoryStore::default()
        }
    }
}

pub fn use_stores() -> AppStores {
    use_context::<AppStores>().expect("AppStores not found in component tree")
}

/// Reactive lookup of one record; re-runs when the store changes
pub fn find_record<T>(store: RwSignal<InMemoryStore<T>>, id: &str) -> Result<T, StoreError>
where
    T: Record + Searchable + Send + Sync + 'static,
{
    store.with(|s| s.get(id))
}

/// Commit a validated patch; returns the saved record
pub fn commit_patch<T>(
    store: RwSignal<InMemoryStore<T>>,
    id: &str,
    patch: &T::Patch,
) -> Result<T, StoreError>
where
    T: Record + Searchable + Send + Sync + 'static,
{
    store
        .try_update(|s| s.update(id, patch))
        .unwrap_or_else(|| Err(StoreError::NotFound(id.to_string())))
}
