use super::view_model::PreorderEditViewModel;
use crate::layout::global_context::use_global_context;
use crate::shared::components::record_not_found::RecordNotFound;
use crate::shared::form::{bound_input, bound_select, bound_textarea, status_options, FormField};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::stores::use_stores;
use contracts::domain::a002_preorder::draft::{
    FIELD_CUSTOMER, FIELD_ESTIMATED_DELIVERY, FIELD_PRODUCT, FIELD_QUANTITY, FIELD_UNIT_PRICE,
};
use contracts::domain::a002_preorder::{PaymentMethod, PaymentStatus, PreorderStatus};
use contracts::domain::common::RecordStore;
use contracts::shared::config::ConsoleConfig;
use contracts::shared::route::Route;
use leptos::prelude::*;

#[component]
pub fn PreorderEdit(id: String) -> impl IntoView {
    let ctx = use_global_context();
    let stores = use_stores();
    let config = use_context::<ConsoleConfig>().expect("ConsoleConfig not found");
    let delay_ms = config.console.save_delay_ms;

    let preorder = match stores.preorders.with_untracked(|s| s.get(&id)) {
        Ok(preorder) => preorder,
        Err(e) => {
            log::warn!("Preorder edit: {}", e);
            return view! {
                <PageFrame page_id="a002_preorder--edit" category=PAGE_CAT_DETAIL>
                    <RecordNotFound
                        message=e.to_string()
                        back_label="Volver a Prepedidos"
                        on_back=Callback::new(move |_| ctx.navigate(Route::Preorders))
                    />
                </PageFrame>
            }
            .into_any();
        }
    };

    let vm = PreorderEditViewModel::new(&preorder);
    let errors = vm.errors;
    let id = StoredValue::new(id);
    let to_detail = move || ctx.navigate(Route::PreorderDetail(id.get_value()));

    let on_saved = Callback::new(move |saved_id: String| {
        ctx.navigate(Route::PreorderDetail(saved_id));
    });
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(stores.preorders, id.get_value(), delay_ms, on_saved);
    };

    let mut method_options = vec![(String::new(), "Sin especificar".to_string())];
    method_options.extend(status_options::<PaymentMethod>());

    view! {
        <PageFrame page_id="a002_preorder--edit" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <button class="btn btn-secondary" on:click=move |_| to_detail()>
                        {icon("arrow-left")}
                        "Volver"
                    </button>
                    <div>
                        <h1 class="page__title">"Editar Prepedido"</h1>
                        <span class="page__subtitle">{preorder.order_number.clone()}</span>
                    </div>
                </div>
            </div>

            <div class="page__content">
                <form class="details-form" on:submit=on_submit>
                    {move || vm.save_error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                    <div class="card">
                        <div class="card__header">
                            {icon("user")}
                            <h3>"Cliente"</h3>
                        </div>
                        <FormField label="Nombre del Cliente" field=FIELD_CUSTOMER required=true errors=errors>
                            {bound_input(vm.form, "text", |d| d.customer.clone(), |d, v| d.customer = v)}
                        </FormField>
                        <div class="form-row">
                            <FormField label="Email" errors=errors>
                                {bound_input(vm.form, "email", |d| d.customer_email.clone(), |d, v| d.customer_email = v)}
                            </FormField>
                            <FormField label="Teléfono" errors=errors>
                                {bound_input(vm.form, "tel", |d| d.customer_phone.clone(), |d, v| d.customer_phone = v)}
                            </FormField>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            {icon("package")}
                            <h3>"Producto"</h3>
                        </div>
                        <div class="form-row">
                            <FormField label="Producto" field=FIELD_PRODUCT required=true errors=errors>
                                {bound_input(vm.form, "text", |d| d.product.clone(), |d, v| d.product = v)}
                            </FormField>
                            <FormField label="SKU" errors=errors>
                                {bound_input(vm.form, "text", |d| d.product_sku.clone(), |d, v| d.product_sku = v)}
                            </FormField>
                        </div>
                        <div class="form-row">
                            <FormField label="Cantidad" field=FIELD_QUANTITY required=true errors=errors>
                                {bound_input(vm.form, "number", |d| d.quantity.clone(), |d, v| d.quantity = v)}
                            </FormField>
                            <FormField label="Precio Unitario" field=FIELD_UNIT_PRICE required=true errors=errors>
                                {bound_input(vm.form, "number", |d| d.unit_price.clone(), |d, v| d.unit_price = v)}
                            </FormField>
                            <div class="form-group">
                                <label>"Total"</label>
                                <div class="form-readonly">{move || vm.total_preview()}</div>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            {icon("credit-card")}
                            <h3>"Estado y Pago"</h3>
                        </div>
                        <div class="form-row">
                            <FormField label="Estado" errors=errors>
                                {bound_select(vm.form, status_options::<PreorderStatus>(), |d| d.status.clone(), |d, v| d.status = v)}
                            </FormField>
                            <FormField label="Estado del Pago" errors=errors>
                                {bound_select(vm.form, status_options::<PaymentStatus>(), |d| d.payment_status.clone(), |d, v| d.payment_status = v)}
                            </FormField>
                            <FormField label="Método de Pago" errors=errors>
                                {bound_select(vm.form, method_options, |d| d.payment_method.clone(), |d, v| d.payment_method = v)}
                            </FormField>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            {icon("truck")}
                            <h3>"Envío"</h3>
                        </div>
                        <FormField label="Fecha Estimada de Entrega" field=FIELD_ESTIMATED_DELIVERY errors=errors>
                            {bound_input(vm.form, "date", |d| d.estimated_delivery.clone(), |d, v| d.estimated_delivery = v)}
                        </FormField>
                        <FormField label="Dirección" errors=errors>
                            {bound_input(vm.form, "text", |d| d.shipping_street.clone(), |d, v| d.shipping_street = v)}
                        </FormField>
                        <div class="form-row">
                            <FormField label="Ciudad" errors=errors>
                                {bound_input(vm.form, "text", |d| d.shipping_city.clone(), |d, v| d.shipping_city = v)}
                            </FormField>
                            <FormField label="Código Postal" errors=errors>
                                {bound_input(vm.form, "text", |d| d.shipping_postal_code.clone(), |d, v| d.shipping_postal_code = v)}
                            </FormField>
                            <FormField label="País" errors=errors>
                                {bound_input(vm.form, "text", |d| d.shipping_country.clone(), |d, v| d.shipping_country = v)}
                            </FormField>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            {icon("file-text")}
                            <h3>"Notas"</h3>
                        </div>
                        <FormField label="Notas" errors=errors>
                            {bound_textarea(vm.form, 3, |d| d.notes.clone(), |d, v| d.notes = v)}
                        </FormField>
                    </div>

                    <div class="details-actions">
                        <button type="submit" class="btn btn-primary" disabled=move || vm.is_saving()>
                            {icon("save")}
                            {move || if vm.is_saving() { "Guardando..." } else { "Guardar Cambios" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            disabled=move || vm.is_saving()
                            on:click=move |_| to_detail()
                        >
                            {icon("x")}
                            "Cancelar"
                        </button>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
    .into_any()
}
