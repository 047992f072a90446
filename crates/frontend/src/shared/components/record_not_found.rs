use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Shown by detail and edit pages when the id does not resolve to a record
#[component]
pub fn RecordNotFound(
    #[prop(into)] message: String,
    back_label: &'static str,
    on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="page__content">
            <div class="empty-state">
                <div class="empty-state__icon">{icon("alert-circle")}</div>
                <h2>"Registro no encontrado"</h2>
                <p>{message}</p>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_back.run(())>
                    {icon("arrow-left")}
                    {back_label}
                </Button>
            </div>
        </div>
    }
}
