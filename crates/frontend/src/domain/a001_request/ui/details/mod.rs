use crate::layout::global_context::{use_global_context, AppGlobalContext};
use crate::shared::components::field_row::FieldRow;
use crate::shared::components::record_not_found::RecordNotFound;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::stores::{find_record, use_stores};
use contracts::domain::a001_request::Request;
use contracts::shared::format::{format_date, format_datetime, format_optional_text};
use contracts::shared::route::Route;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RequestDetail(id: String) -> impl IntoView {
    let ctx = use_global_context();
    let stores = use_stores();
    let id = StoredValue::new(id);

    // Re-resolved whenever the store changes, so a saved edit shows up here
    let record = Memo::new(move |_| id.with_value(|id| find_record(stores.requests, id)));

    view! {
        <PageFrame page_id="a001_request--detail" category=PAGE_CAT_DETAIL>
            {move || match record.get() {
                Ok(request) => request_view(request, ctx).into_any(),
                Err(e) => {
                    log::warn!("Request detail: {}", e);
                    view! {
                        <RecordNotFound
                            message=e.to_string()
                            back_label="Volver a Solicitudes"
                            on_back=Callback::new(move |_| ctx.navigate(Route::Requests))
                        />
                    }
                    .into_any()
                }
            }}
        </PageFrame>
    }
}

fn request_view(request: Request, ctx: AppGlobalContext) -> impl IntoView {
    let edit_route = Route::RequestEdit(request.id.clone());
    let updated = request
        .updated_at
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string());
    let requester_email = format_optional_text(&request.requester_email);
    let assigned_to = format_optional_text(&request.assigned_to);
    let assigned_email = format_optional_text(&request.assigned_to_email);
    let description = if request.description.is_empty() {
        "Sin descripción".to_string()
    } else {
        request.description.clone()
    };

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| ctx.navigate(Route::Requests)
                >
                    {icon("arrow-left")}
                    "Volver"
                </Button>
                <div>
                    <h1 class="page__title">{request.title.clone()}</h1>
                    <span class="page__subtitle">{format!("Solicitud #{}", request.id)}</span>
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
                            <h3>"Información General"</h3>
                            <div class="card__badges">
                                <StatusBadge value=request.status.clone() with_icon=true />
                                <StatusBadge value=request.priority.clone() with_icon=true />
                            </div>
                        </div>
                        <div class="detail-section">
                            <h4>"Descripción"</h4>
                            <p class="detail-text">{description}</p>
                        </div>
                        <div class="detail-fields">
                            <FieldRow label="Tipo" value=request.type_label().to_string() />
                            <FieldRow label="Departamento" value=request.department.clone() />
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            {icon("message-square")}
                            <h3>{format!("Comentarios ({})", request.comments.len())}</h3>
                        </div>
                        {if request.comments.is_empty() {
                            view! { <p class="detail-text detail-text--muted">"Sin comentarios"</p> }.into_any()
                        } else {
                            view! {
                                <ul class="comment-list">
                                    {request.comments.iter().map(|comment| view! {
                                        <li class="comment-list__item">
                                            <div class="comment-list__meta">
                                                <strong>{comment.author.clone()}</strong>
                                                <span>{format_datetime(comment.created_at)}</span>
                                            </div>
                                            <p>{comment.content.clone()}</p>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            }
                            .into_any()
                        }}
                    </div>
                </div>

                <div class="detail-grid__side">
                    <div class="card">
                        <div class="card__header">
                            {icon("user")}
                            <h3>"Personas"</h3>
                        </div>
                        <div class="detail-fields">
                            <FieldRow label="Solicitante" value=request.requester.clone() />
                            <FieldRow label="Email" value=requester_email />
                            <FieldRow label="Asignado a" value=assigned_to />
                            <FieldRow label="Email asignado" value=assigned_email />
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            {icon("calendar")}
                            <h3>"Fechas"</h3>
                        </div>
                        <div class="detail-fields">
                            <FieldRow label="Creada" value=format_date(request.created_at) />
                            <FieldRow label="Actualizada" value=updated />
                            <FieldRow label="Fecha Límite" value=format_date(request.due_date) />
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            {icon("paperclip")}
                            <h3>{format!("Adjuntos ({})", request.attachments.len())}</h3>
                        </div>
                        {if request.attachments.is_empty() {
                            view! { <p class="detail-text detail-text--muted">"Sin adjuntos"</p> }.into_any()
                        } else {
                            view! {
                                <ul class="attachment-list">
                                    {request.attachments.iter().map(|file| view! {
                                        <li class="attachment-list__item">
                                            {icon("file-text")}
                                            <span class="attachment-list__name">{file.name.clone()}</span>
                                            <span class="attachment-list__size">{file.size.clone()}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            }
                            .into_any()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
