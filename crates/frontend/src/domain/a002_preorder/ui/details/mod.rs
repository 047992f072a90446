use crate::layout::global_context::{use_global_context, AppGlobalContext};
use crate::shared::components::field_row::FieldRow;
use crate::shared::components::record_not_found::RecordNotFound;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::stores::{find_record, use_stores};
use contracts::domain::a002_preorder::Preorder;
use contracts::shared::format::{
    format_date, format_money, format_optional_date, format_optional_text,
};
use contracts::shared::route::Route;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PreorderDetail(id: String) -> impl IntoView {
    let ctx = use_global_context();
    let stores = use_stores();
    let id = StoredValue::new(id);

    let record = Memo::new(move |_| id.with_value(|id| find_record(stores.preorders, id)));

    view! {
        <PageFrame page_id="a002_preorder--detail" category=PAGE_CAT_DETAIL>
            {move || match record.get() {
                Ok(preorder) => preorder_view(preorder, ctx).into_any(),
                Err(e) => {
                    log::warn!("Preorder detail: {}", e);
                    view! {
                        <RecordNotFound
                            message=e.to_string()
                            back_label="Volver a Prepedidos"
                            on_back=Callback::new(move |_| ctx.navigate(Route::Preorders))
                        />
                    }
                    .into_any()
                }
            }}
        </PageFrame>
    }
}

fn preorder_view(preorder: Preorder, ctx: AppGlobalContext) -> impl IntoView {
    let edit_route = Route::PreorderEdit(preorder.id.clone());
    let payment_method = preorder
        .payment_method
        .as_ref()
        .map(|m| m.label().to_string())
        .unwrap_or_else(|| "Sin especificar".to_string());
    let address = &preorder.shipping_address;
    let shipping = (!address.is_empty()).then(|| {
        view! {
            <FieldRow label="Dirección" value=address.street.clone() />
            <FieldRow label="Ciudad" value=address.city.clone() />
            <FieldRow label="Código Postal" value=address.postal_code.clone() />
            <FieldRow label="País" value=address.country.clone() />
        }
    });

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| ctx.navigate(Route::Preorders)
                >
                    {icon("arrow-left")}
                    "Volver"
                </Button>
                <div>
                    <h1 class="page__title">{preorder.order_number.clone()}</h1>
                    <span class="page__subtitle">
                        {format!("Creado el {}", format_date(preorder.created_at))}
                    </span>
                </div>
            </div>
            <div class="page__header-right">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(edit_route.clone())
                >
                    {icon("edit")}
                    "Editar"
                </Button>
            </div>
        </div>

        <div class="page__content">
            <div class="detail-grid">
                <div class="detail-grid__main">
                    <div class="card">
                        <div class="card__header">
                            {icon("package")}
                            <h3>"Producto"</h3>
                            <div class="card__badges">
                                <StatusBadge value=preorder.status.clone() with_icon=true />
                            </div>
                        </div>
                        <div class="detail-fields">
                            <FieldRow label="Producto" value=preorder.product.clone() />
                            <FieldRow label="SKU" value=format_optional_text(&preorder.product_sku) />
                            <FieldRow label="Cantidad" value=preorder.quantity.to_string() />
                            <FieldRow label="Precio Unitario" value=format_money(preorder.unit_price) />
                        </div>
                        <div class="detail-total">
                            <span>"Total"</span>
                            <strong>{format_money(preorder.total_amount)}</strong>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            {icon("file-text")}
                            <h3>"Notas"</h3>
                        </div>
                        <p class="detail-text" class:detail-text--muted=preorder.notes.is_empty()>
                            {if preorder.notes.is_empty() { "Sin notas".to_string() } else { preorder.notes.clone() }}
                        </p>
                    </div>
                </div>

                <div class="detail-grid__side">
                    <div class="card">
                        <div class="card__header">
                            {icon("user")}
                            <h3>"Cliente"</h3>
                        </div>
                        <div class="detail-fields">
                            <FieldRow label="Nombre" value=preorder.customer.clone() />
                            <FieldRow label="Email" value=format_optional_text(&preorder.customer_email) />
                            <FieldRow label="Teléfono" value=format_optional_text(&preorder.customer_phone) />
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            {icon("credit-card")}
                            <h3>"Pago"</h3>
                        </div>
                        <div class="detail-fields">
                            <div class="detail-field">
                                <span class="detail-field__label">"Estado"</span>
                                <span class="detail-field__value">
                                    <StatusBadge value=preorder.payment_status.clone() />
                                </span>
                            </div>
                            <FieldRow label="Método" value=payment_method />
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            {icon("truck")}
                            <h3>"Envío"</h3>
                        </div>
                        <div class="detail-fields">
                            <FieldRow
                                label="Entrega Estimada"
                                value=format_optional_date(preorder.estimated_delivery)
                            />
                            {shipping}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
