//! Application shell
//!
//! - `AppShell` is the auth gate: `LoginPage` or `MainLayout`
//! - `MainLayout` is the shell with sidebar and the active page

use crate::layout::center::registry::render_route;
use crate::layout::global_context::use_global_context;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Main application layout.
///
/// Initializes router integration for syncing the active route with the URL
/// (?active=...).
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();

    // Runs once when the layout is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                // The page is rebuilt on every navigation
                (move || render_route(ctx.route.get())).into_any()
            }
        />
    }
}

/// Application shell - auth gate component.
#[component]
pub fn AppShell() -> impl IntoView {
    let (session, _) = use_auth();

    view! {
        <Show
            when=move || session.with(|s| s.is_authenticated())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
