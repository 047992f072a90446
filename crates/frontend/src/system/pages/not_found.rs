use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::shared::route::Route;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="page__content">
                <div class="empty-state">
                    <div class="empty-state__icon">{icon("alert-circle")}</div>
                    <h2>"Página no encontrada"</h2>
                    <p>{format!("La ruta \"{}\" no existe.", path)}</p>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.navigate(Route::Dashboard)
                    >
                        "Ir al Dashboard"
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}
