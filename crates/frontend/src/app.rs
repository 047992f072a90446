use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::list_state::ListFilters;
use crate::shared::stores::AppStores;
use crate::system::auth::context::AuthProvider;
use contracts::shared::config::{load_config, ConsoleConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Falling back to default configuration: {:#}", e);
        ConsoleConfig::default()
    });

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());
    provide_context(AppStores::seeded());
    provide_context(ListFilters::new());
    provide_context(config);

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
