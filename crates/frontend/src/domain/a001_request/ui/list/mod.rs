pub mod state;

use self::state::{create_state, LIST_KEY};
use crate::layout::global_context::use_global_context;
use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::row_actions::RowActions;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::stores::use_stores;
use contracts::domain::a001_request::{Request, RequestStats};
use contracts::shared::config::ConsoleConfig;
use contracts::shared::format::format_date;
use contracts::shared::route::Route;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RequestList() -> impl IntoView {
    let ctx = use_global_context();
    let stores = use_stores();
    let config = use_context::<ConsoleConfig>().expect("ConsoleConfig not found");
    let state = create_state(config.console.items_per_page);

    let derived = Memo::new(move |_| {
        stores
            .requests
            .with(|store| state.with(|s| s.view(store.records())))
    });

    let stats = Signal::derive(move || {
        stores
            .requests
            .with(|store| RequestStats::from_records(store.records()))
    });

    let go_to_page = move |page: usize| {
        let count = derived.with_untracked(|v| v.filtered_count());
        state.update(|s| s.go_to_page(page, count));
    };

    view! {
        <PageFrame page_id="a001_request--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Solicitudes"</h1>
                    <span class="page__subtitle">"Gestiona las solicitudes de los empleados"</span>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Pendientes"
                        icon_name="clock"
                        variant="warning"
                        value=Signal::derive(move || stats.get().pending.to_string())
                    />
                    <StatCard
                        label="Aprobadas"
                        icon_name="check-circle"
                        variant="success"
                        value=Signal::derive(move || stats.get().approved.to_string())
                    />
                    <StatCard
                        label="En Revisión"
                        icon_name="eye"
                        variant="info"
                        value=Signal::derive(move || stats.get().in_review.to_string())
                    />
                    <StatCard
                        label="Rechazadas"
                        icon_name="x-circle"
                        variant="danger"
                        value=Signal::derive(move || stats.get().rejected.to_string())
                    />
                </div>

                <ListToolbar state=state list_key=LIST_KEY placeholder="Buscar solicitudes..." />

                <div class="card">
                    <div class="card__header">
                        <h3>{move || format!("Lista de Solicitudes ({})", derived.with(|v| v.filtered_count()))}</h3>
                    </div>

                    <Show
                        when=move || derived.with(|v| v.filtered_count() > 0)
                        fallback=|| view! {
                            <div class="empty-state">
                                <p>"No se encontraron solicitudes con los filtros actuales."</p>
                            </div>
                        }
                    >
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%; min-width: 900px;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=240.0>"Solicitud"</TableHeaderCell>
                                        <TableHeaderCell min_width=180.0>"Solicitante"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Departamento"</TableHeaderCell>
                                        <TableHeaderCell min_width=100.0>"Prioridad"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Estado"</TableHeaderCell>
                                        <TableHeaderCell min_width=110.0>"Fecha Límite"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Acciones"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || derived.with(|v| v.page.clone())
                                        key=|item| item.id.clone()
                                        children=move |request: Request| {
                                            let id = request.id.clone();
                                            let detail = Route::RequestDetail(id.clone());
                                            let detail_link = detail.clone();
                                            let edit = Route::RequestEdit(id.clone());
                                            let type_label = request.type_label().to_string();

                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <a
                                                                href="#"
                                                                class="table__link"
                                                                on:click=move |e| {
                                                                    e.prevent_default();
                                                                    ctx.navigate(detail_link.clone());
                                                                }
                                                            >
                                                                {request.title.clone()}
                                                            </a>
                                                            <div class="table__secondary">{type_label}</div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {request.requester.clone()}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {request.department.clone()}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <StatusBadge value=request.priority.clone() with_icon=true />
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <StatusBadge value=request.status.clone() with_icon=true />
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {format_date(request.due_date)}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <RowActions
                                                            on_view=Callback::new(move |_| ctx.navigate(detail.clone()))
                                                            on_edit=Callback::new(move |_| ctx.navigate(edit.clone()))
                                                        />
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }
                                    />
                                </TableBody>
                            </Table>
                        </div>
                    </Show>

                    <PaginationControls
                        current_page=Signal::derive(move || derived.with(|v| v.current_page))
                        total_pages=Signal::derive(move || derived.with(|v| v.total_pages))
                        window=Signal::derive(move || derived.with(|v| v.window.clone()))
                        summary=Signal::derive(move || derived.with(|v| v.summary.label()))
                        on_page_change=Callback::new(go_to_page)
                    />
                </div>
            </div>
        </PageFrame>
    }
}
