//! Filter state of the list pages, remembered in memory for the session so
//! a list comes back with the same search and date range after navigating
//! away. Nothing is written to browser storage; a reload starts unfiltered.
//! The page position is not remembered; a restored list opens on page 1.

use contracts::shared::list_query::QueryState;
use leptos::prelude::*;
use std::collections::HashMap;

/// Last query of each list, keyed by list
#[derive(Debug, Clone, Default)]
pub struct QueryMemory {
    queries: HashMap<&'static str, QueryState>,
}

impl QueryMemory {
    /// Last query of `list_key`, or no filter if the list was never filtered
    pub fn recall(&self, list_key: &str) -> QueryState {
        self.queries.get(list_key).cloned().unwrap_or_default()
    }

    pub fn remember(&mut self, list_key: &'static str, query: &QueryState) {
        if *query == QueryState::default() {
            self.queries.remove(list_key);
        } else {
            self.queries.insert(list_key, query.clone());
        }
    }
}

/// Session-wide [`QueryMemory`] shared through context
#[derive(Clone, Copy)]
pub struct ListFilters(RwSignal<QueryMemory>);

impl ListFilters {
    pub fn new() -> Self {
        Self(RwSignal::new(QueryMemory::default()))
    }

    pub fn load_query(&self, list_key: &str) -> QueryState {
        self.0.with_untracked(|m| m.recall(list_key))
    }

    pub fn save_query(&self, list_key: &'static str, query: &QueryState) {
        self.0.update_untracked(|m| m.remember(list_key, query));
    }
}

impl Default for ListFilters {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_list_filters() -> ListFilters {
    use_context::<ListFilters>().expect("ListFilters not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::shared::list_query::DateRange;

    #[test]
    fn test_recall_last_query() {
        let mut memory = QueryMemory::default();
        let mut query = QueryState::with_search("iphone");
        query.date_range = NaiveDate::from_ymd_opt(2024, 1, 5).map(DateRange::starting);

        memory.remember("a002_preorder", &query);
        assert_eq!(memory.recall("a002_preorder"), query);
    }

    #[test]
    fn test_unknown_list_means_no_filter() {
        let memory = QueryMemory::default();
        assert_eq!(memory.recall("a001_request"), QueryState::default());
    }

    #[test]
    fn test_queries_are_per_list() {
        let mut memory = QueryMemory::default();
        memory.remember("a001_request", &QueryState::with_search("laptop"));
        assert_eq!(memory.recall("a002_preorder"), QueryState::default());
        assert_eq!(memory.recall("a001_request").search_text, "laptop");
    }

    #[test]
    fn test_cleared_query_is_forgotten() {
        let mut memory = QueryMemory::default();
        memory.remember("a001_request", &QueryState::with_search("laptop"));
        memory.remember("a001_request", &QueryState::default());
        assert!(memory.queries.is_empty());
        assert_eq!(memory.recall("a001_request"), QueryState::default());
    }
}
