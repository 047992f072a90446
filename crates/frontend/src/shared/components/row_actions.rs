use crate::shared::icons::icon;
use leptos::prelude::*;

/// View / edit / delete buttons of a table row. Records cannot be deleted,
/// so the delete button is always disabled.
#[component]
pub fn RowActions(on_view: Callback<()>, on_edit: Callback<()>) -> impl IntoView {
    view! {
        <div class="row-actions">
            <button class="row-actions__btn" title="Ver Detalles" on:click=move |_| on_view.run(())>
                {icon("eye")}
            </button>
            <button class="row-actions__btn" title="Editar" on:click=move |_| on_edit.run(())>
                {icon("edit")}
            </button>
            <button class="row-actions__btn row-actions__btn--danger" title="Eliminar" disabled=true>
                {icon("trash")}
            </button>
        </div>
    }
}
