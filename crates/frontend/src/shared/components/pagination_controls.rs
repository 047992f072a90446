use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pager under a table: summary text, previous/next and a window of at most
/// five page numbers. Hidden while everything fits on one page.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages, at least 1
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Page numbers to show as buttons
    #[prop(into)]
    window: Signal<Vec<usize>>,

    /// "Mostrando a a b de n resultados"
    #[prop(into)]
    summary: Signal<String>,

    /// Callback with the requested page (1-indexed)
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <span class="pagination-info">{move || summary.get()}</span>
                <div class="pagination-controls__pages">
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            let page = current_page.get();
                            if page > 1 {
                                on_page_change.run(page - 1);
                            }
                        }
                        disabled=move || current_page.get() <= 1
                        title="Página anterior"
                    >
                        {icon("chevron-left")}
                        "Anterior"
                    </button>
                    <For
                        each=move || window.get()
                        key=|page| *page
                        children=move |page| {
                            view! {
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--active=move || current_page.get() == page
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                        }
                    />
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            let page = current_page.get();
                            if page < total_pages.get() {
                                on_page_change.run(page + 1);
                            }
                        }
                        disabled=move || current_page.get() >= total_pages.get()
                        title="Página siguiente"
                    >
                        "Siguiente"
                        {icon("chevron-right")}
                    </button>
                </div>
            </div>
        </Show>
    }
}
