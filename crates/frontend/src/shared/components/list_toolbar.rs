use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::filter_chips::FilterChips;
use crate::shared::icons::icon;
use crate::shared::list_state::use_list_filters;
use contracts::shared::list_query::ListState;
use leptos::prelude::*;
use thaw::*;

/// Search box, date filter and active-filter chips of a list page.
///
/// Every change of the query goes through `ListState`, which moves the list
/// back to page 1; the query is remembered under `list_key` after each change.
#[component]
pub fn ListToolbar(
    state: RwSignal<ListState>,
    list_key: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let filters = use_list_filters();
    let search_text = RwSignal::new(state.with_untracked(|s| s.query.search_text.clone()));

    Effect::new(move || {
        let v = search_text.get();
        untrack(move || {
            state.update(|s| s.set_search_text(v));
        });
    });

    Effect::new(move || {
        let query = state.with(|s| s.query.clone());
        filters.save_query(list_key, &query);
    });

    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let date_range = Signal::derive(move || state.with(|s| s.query.date_range));

    view! {
        <div class="filter-panel">
            <div class="filter-panel-content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div class="search-box" style="flex: 1; max-width: 420px;">
                        {icon("search")}
                        <Input value=search_text placeholder=placeholder />
                    </div>
                    <DateRangePicker
                        value=date_range
                        on_change=Callback::new(move |range| {
                            state.update(|s| s.set_date_range(range));
                        })
                    />
                </Flex>
            </div>

            <FilterChips
                query=query
                on_clear_search=Callback::new(move |_| search_text.set(String::new()))
                on_clear_date=Callback::new(move |_| state.update(|s| s.clear_date_range()))
                on_clear_all=Callback::new(move |_| {
                    search_text.set(String::new());
                    state.update(|s| s.clear_filters());
                })
            />
        </div>
    }
}
