use contracts::shared::route::Route;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<Route>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(Route::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the active route from `?active=...` and keep the URL in sync
    /// with every later navigation.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_path) = params.get("active") {
            let route = Route::parse(active_path);
            log::debug!("Restoring route from URL: {}", route);
            self.route.set(route);
        }

        let this = *self;
        Effect::new(move |_| {
            let route = this.route.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), route.path())]))
                    .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }

            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(&format!("{} | Admin Panel", route.title()));
            }
        });
    }

    pub fn navigate(&self, route: Route) {
        log::debug!("navigate: {}", route);
        self.route.set(route);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
