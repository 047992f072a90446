use super::view_model::{department_options, type_options, RequestEditViewModel};
use crate::layout::global_context::use_global_context;
use crate::shared::components::record_not_found::RecordNotFound;
use crate::shared::form::{bound_input, bound_select, bound_textarea, status_options, FormField};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::stores::use_stores;
use contracts::domain::a001_request::draft::{FIELD_DUE_DATE, FIELD_REQUESTER, FIELD_TITLE};
use contracts::domain::a001_request::{RequestPriority, RequestStatus};
use contracts::domain::common::RecordStore;
use contracts::shared::config::ConsoleConfig;
use contracts::shared::route::Route;
use leptos::prelude::*;

#[component]
pub fn RequestEdit(id: String) -> impl IntoView {
    let ctx = use_global_context();
    let stores = use_stores();
    let config = use_context::<ConsoleConfig>().expect("ConsoleConfig not found");
    let delay_ms = config.console.save_delay_ms;

    // The form is filled once; later store changes do not overwrite typing
    let request = match stores.requests.with_untracked(|s| s.get(&id)) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("Request edit: {}", e);
            return view! {
                <PageFrame page_id="a001_request--edit" category=PAGE_CAT_DETAIL>
                    <RecordNotFound
                        message=e.to_string()
                        back_label="Volver a Solicitudes"
                        on_back=Callback::new(move |_| ctx.navigate(Route::Requests))
                    />
                </PageFrame>
            }
            .into_any();
        }
    };

    let vm = RequestEditViewModel::new(&request);
    let errors = vm.errors;
    let id = StoredValue::new(id);
    let to_detail = move || ctx.navigate(Route::RequestDetail(id.get_value()));

    let on_saved = Callback::new(move |saved_id: String| {
        ctx.navigate(Route::RequestDetail(saved_id));
    });
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(stores.requests, id.get_value(), delay_ms, on_saved);
    };

    view! {
        <PageFrame page_id="a001_request--edit" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <button class="btn btn-secondary" on:click=move |_| to_detail()>
                        {icon("arrow-left")}
                        "Volver"
                    </button>
                    <div>
                        <h1 class="page__title">"Editar Solicitud"</h1>
                        <span class="page__subtitle">{format!("Solicitud #{}", request.id)}</span>
                    </div>
                </div>
            </div>

            <div class="page__content">
                <form class="details-form" on:submit=on_submit>
                    {move || vm.save_error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                    <div class="card">
                        <div class="card__header">
                            <h3>"Información General"</h3>
                        </div>
                        <FormField label="Título" field=FIELD_TITLE required=true errors=errors>
                            {bound_input(vm.form, "text", |d| d.title.clone(), |d, v| d.title = v)}
                        </FormField>
                        <FormField label="Descripción" errors=errors>
                            {bound_textarea(vm.form, 4, |d| d.description.clone(), |d, v| d.description = v)}
                        </FormField>
                        <div class="form-row">
                            <FormField label="Tipo" errors=errors>
                                {bound_select(vm.form, type_options(), |d| d.request_type.clone(), |d, v| d.request_type = v)}
                            </FormField>
                            <FormField label="Departamento" errors=errors>
                                {bound_select(vm.form, department_options(), |d| d.department.clone(), |d, v| d.department = v)}
                            </FormField>
                        </div>
                        <div class="form-row">
                            <FormField label="Prioridad" errors=errors>
                                {bound_select(vm.form, status_options::<RequestPriority>(), |d| d.priority.clone(), |d, v| d.priority = v)}
                            </FormField>
                            <FormField label="Estado" errors=errors>
                                {bound_select(vm.form, status_options::<RequestStatus>(), |d| d.status.clone(), |d, v| d.status = v)}
                            </FormField>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            <h3>"Personas y Fechas"</h3>
                        </div>
                        <div class="form-row">
                            <FormField label="Solicitante" field=FIELD_REQUESTER required=true errors=errors>
                                {bound_input(vm.form, "text", |d| d.requester.clone(), |d, v| d.requester = v)}
                            </FormField>
                            <FormField label="Email del Solicitante" errors=errors>
                                {bound_input(vm.form, "email", |d| d.requester_email.clone(), |d, v| d.requester_email = v)}
                            </FormField>
                        </div>
                        <div class="form-row">
                            <FormField label="Asignado a" errors=errors>
                                {bound_input(vm.form, "text", |d| d.assigned_to.clone(), |d, v| d.assigned_to = v)}
                            </FormField>
                            <FormField label="Fecha Límite" field=FIELD_DUE_DATE required=true errors=errors>
                                {bound_input(vm.form, "date", |d| d.due_date.clone(), |d, v| d.due_date = v)}
                            </FormField>
                        </div>
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
