use crate::layout::global_context::{use_global_context, AppGlobalContext};
use crate::shared::components::stat_card::{StatCard, StatChange};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_overview::{overview, QuickAction};
use contracts::shared::route::Route;
use leptos::prelude::*;

/// Landing page after login. All figures are static.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let data = overview();

    let stats = data
        .stats
        .into_iter()
        .map(|card| {
            let change = StatChange {
                text: card.change,
                positive: card.positive,
            };
            let value = card.value;
            view! {
                <StatCard
                    label=card.title
                    icon_name=card.icon
                    value=Signal::derive(move || value.clone())
                    change=change
                />
            }
        })
        .collect_view();

    let activity = data
        .recent_activity
        .into_iter()
        .map(|item| {
            view! {
                <li class="activity-item">
                    <span class=item.kind.css_class()></span>
                    <div class="activity-item__text">
                        <p>
                            <strong>{item.user}</strong>
                            " "
                            {item.action}
                        </p>
                        <span class="activity-item__time">{item.time}</span>
                    </div>
                </li>
            }
        })
        .collect_view();

    let actions = data
        .quick_actions
        .into_iter()
        .map(|action| quick_action_button(action, ctx))
        .collect_view();

    let status = data
        .system_status
        .into_iter()
        .map(|metric| {
            view! {
                <div class="system-metric">
                    <span class="system-metric__label">{metric.label}</span>
                    <span class="system-metric__value">{metric.value}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                    <span class="page__subtitle">
                        "Bienvenido de vuelta, aquí tienes un resumen de tu aplicación"
                    </span>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">{stats}</div>

                <div class="dashboard-grid">
                    <section class="card">
                        <div class="card__header">
                            <h3>"Actividad Reciente"</h3>
                            <span class="card__subtitle">"Últimas acciones realizadas en la plataforma"</span>
                        </div>
                        <ul class="activity-list">{activity}</ul>
                    </section>

                    <section class="card">
                        <div class="card__header">
                            <h3>"Acciones Rápidas"</h3>
                            <span class="card__subtitle">"Tareas comunes del administrador"</span>
                        </div>
                        <div class="quick-actions">{actions}</div>
                    </section>
                </div>

                <section class="card">
                    <div class="card__header">
                        <h3>"Estado del Sistema"</h3>
                    </div>
                    <div class="system-status">{status}</div>
                </section>
            </div>
        </PageFrame>
    }
}

fn quick_action_button(action: QuickAction, ctx: AppGlobalContext) -> impl IntoView {
    let target = action.href.as_deref().map(Route::parse);
    let disabled = target.is_none();

    view! {
        <button
            class="quick-action"
            disabled=disabled
            on:click=move |_| {
                if let Some(route) = target.clone() {
                    ctx.navigate(route);
                }
            }
        >
            {icon(&action.icon)}
            <span>{action.label}</span>
        </button>
    }
}
