//! Route registry: the single place that maps a [`Route`] to its page view.

use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_request::ui::{RequestDetail, RequestEdit, RequestList};
use crate::domain::a002_preorder::ui::{PreorderDetail, PreorderEdit, PreorderList};
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::placeholder::PlaceholderPage;
use contracts::shared::route::Route;
use leptos::prelude::*;

pub fn render_route(route: Route) -> AnyView {
    match route {
        Route::Dashboard => view! { <OverviewDashboard /> }.into_any(),

        // a001: requests
        Route::Requests => view! { <RequestList /> }.into_any(),
        Route::RequestDetail(id) => view! { <RequestDetail id=id /> }.into_any(),
        Route::RequestEdit(id) => view! { <RequestEdit id=id /> }.into_any(),

        // a002: preorders
        Route::Preorders => view! { <PreorderList /> }.into_any(),
        Route::PreorderDetail(id) => view! { <PreorderDetail id=id /> }.into_any(),
        Route::PreorderEdit(id) => view! { <PreorderEdit id=id /> }.into_any(),

        Route::Users => view! {
            <PlaceholderPage
                page_id="sys_users--system"
                title="Usuarios"
                subtitle="Gestiona los usuarios de la plataforma"
                icon_name="users"
            />
        }
        .into_any(),
        Route::Reports => view! {
            <PlaceholderPage
                page_id="reports--dashboard"
                title="Reportes"
                subtitle="Informes y estadísticas de la aplicación"
                icon_name="bar-chart"
            />
        }
        .into_any(),
        Route::Settings => view! {
            <PlaceholderPage
                page_id="settings--system"
                title="Configuración"
                subtitle="Ajustes generales del panel de administración"
                icon_name="settings"
            />
        }
        .into_any(),

        Route::NotFound(path) => {
            log::warn!("No page registered for path: {}", path);
            view! { <NotFoundPage path=path /> }.into_any()
        }
    }
}
