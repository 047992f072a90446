use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();
    let (_, set_session) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    let logout = move |_| {
        if let Err(e) = do_logout(set_session) {
            log::warn!("Logout left the session flag in storage: {}", e);
        }
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button
                    class="button button--ghost"
                    aria-label="Toggle Left"
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("menu")}
                </button>
                <span class="header__title">{move || ctx.route.get().title()}</span>
            </div>
            <div class="header__actions">
                <div class="header__user">
                    {icon("user")}
                    <span>"Administrador"</span>
                </div>
                <button class="button button--ghost" on:click=logout title="Cerrar sesión">
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
