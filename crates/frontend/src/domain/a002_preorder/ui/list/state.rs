use crate::shared::list_state::use_list_filters;
use contracts::shared::list_query::ListState;
use leptos::prelude::*;

/// Key of the remembered filter of this list
pub const LIST_KEY: &str = "a002_preorder";

/// List state restored with the last search and date range, on page 1
pub fn create_state(items_per_page: usize) -> RwSignal<ListState> {
    let query = use_list_filters().load_query(LIST_KEY);
    RwSignal::new(ListState::with_query(query, items_per_page))
}
