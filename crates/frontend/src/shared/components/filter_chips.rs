use crate::shared::icons::icon;
use contracts::shared::list_query::{FilterChip, QueryState};
use leptos::prelude::*;

/// "Filtros activos:" row with one removable chip per active filter
#[component]
pub fn FilterChips(
    #[prop(into)] query: Signal<QueryState>,
    on_clear_search: Callback<()>,
    on_clear_date: Callback<()>,
    on_clear_all: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || query.with(|q| q.has_active_filters())>
            <div class="filter-chips">
                <span class="filter-chips__title">"Filtros activos:"</span>
                {move || {
                    query.with(|q| q.chips()).into_iter().map(|chip| {
                        let label = chip.label().to_string();
                        let on_remove = match chip {
                            FilterChip::Search(_) => on_clear_search,
                            FilterChip::Date(_) => on_clear_date,
                        };
                        view! {
                            <span class="filter-chip">
                                {label}
                                <button
                                    class="filter-chip__remove"
                                    title="Quitar filtro"
                                    on:click=move |_| on_remove.run(())
                                >
                                    {icon("x")}
                                </button>
                            </span>
                        }
                    }).collect_view()
                }}
                <button class="button button--ghost filter-chips__clear" on:click=move |_| on_clear_all.run(())>
                    "Limpiar filtros"
                </button>
            </div>
        </Show>
    }
}
