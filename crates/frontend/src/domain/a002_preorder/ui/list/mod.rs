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
use contracts::domain::a002_preorder::{Preorder, PreorderStats};
use contracts::shared::config::ConsoleConfig;
use contracts::shared::format::{format_date, format_money, format_optional_date};
use contracts::shared::route::Route;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PreorderList() -> impl IntoView {
    let ctx = use_global_context();
    let stores = use_stores();
    let config = use_context::<ConsoleConfig>().expect("ConsoleConfig not found");
    let state = create_state(config.console.items_per_page);

    let derived = Memo::new(move |_| {
        stores
            .preorders
            .with(|store| state.with(|s| s.view(store.records())))
    });

    let stats = Signal::derive(move || {
        stores
            .preorders
            .with(|store| PreorderStats::from_records(store.records()))
    });

    let go_to_page = move |page: usize| {
        let count = derived.with_untracked(|v| v.filtered_count());
        state.update(|s| s.go_to_page(page, count));
    };

    view! {
        <PageFrame page_id="a002_preorder--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Prepedidos"</h1>
                    <span class="page__subtitle">"Gestiona los pedidos anticipados de los clientes"</span>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid stat-grid--five">
                    <StatCard
                        label="Pendientes"
                        icon_name="clock"
                        variant="warning"
                        value=Signal::derive(move || stats.get().pending.to_string())
                    />
                    <StatCard
                        label="Confirmados"
                        icon_name="check-circle"
                        variant="success"
                        value=Signal::derive(move || stats.get().confirmed.to_string())
                    />
                    <StatCard
                        label="Procesando"
                        icon_name="package"
                        variant="info"
                        value=Signal::derive(move || stats.get().processing.to_string())
                    />
                    <StatCard
                        label="Enviados"
                        icon_name="truck"
                        variant="accent"
                        value=Signal::derive(move || stats.get().shipped.to_string())
                    />
                    <StatCard
                        label="Ingresos"
                        icon_name="dollar"
                        variant="success"
                        value=Signal::derive(move || format_money(stats.get().total_revenue))
                    />
                </div>

                <ListToolbar state=state list_key=LIST_KEY placeholder="Buscar prepedidos..." />

                <div class="card">
                    <div class="card__header">
                        <h3>{move || format!("Lista de Prepedidos ({})", derived.with(|v| v.filtered_count()))}</h3>
                    </div>

                    <Show
                        when=move || derived.with(|v| v.filtered_count() > 0)
                        fallback=|| view! {
                            <div class="empty-state">
                                <p>"No se encontraron prepedidos con los filtros actuales."</p>
                            </div>
                        }
                    >
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%; min-width: 1100px;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=130.0>"Orden"</TableHeaderCell>
                                        <TableHeaderCell min_width=180.0>"Cliente"</TableHeaderCell>
                                        <TableHeaderCell min_width=200.0>"Producto"</TableHeaderCell>
                                        <TableHeaderCell min_width=80.0>"Cantidad"</TableHeaderCell>
                                        <TableHeaderCell min_width=110.0>"Total"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Estado"</TableHeaderCell>
                                        <TableHeaderCell min_width=110.0>"Pago"</TableHeaderCell>
                                        <TableHeaderCell min_width=110.0>"Entrega Est."</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Acciones"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || derived.with(|v| v.page.clone())
                                        key=|item| item.id.clone()
                                        children=move |preorder: Preorder| {
                                            let detail = Route::PreorderDetail(preorder.id.clone());
                                            let detail_link = detail.clone();
                                            let edit = Route::PreorderEdit(preorder.id.clone());

                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <a
                                                                href="#"
                                                                class="table__link"
                                                                on:click=move |e| {
                                                                    e.prevent_default();
                                                                    ctx.navigate(detail_link.clone());
                                                                }
                                                            >
                                                                {preorder.order_number.clone()}
                                                            </a>
                                                            <div class="table__secondary">
                                                                {format_date(preorder.created_at)}
                                                            </div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {preorder.customer.clone()}
                                                            <div class="table__secondary">
                                                                {preorder.customer_email.clone()}
                                                            </div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {preorder.product.clone()}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="table__number">{preorder.quantity}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="table__number">
                                                                {format_money(preorder.total_amount)}
                                                            </span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <StatusBadge value=preorder.status.clone() with_icon=true />
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <StatusBadge value=preorder.payment_status.clone() />
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {format_optional_date(preorder.estimated_delivery)}
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
