use crate::shared::icons::icon;
use leptos::prelude::*;

/// Change since the previous period, already formatted ("+12%")
#[derive(Debug, Clone, PartialEq)]
pub struct StatChange {
    pub text: String,
    pub positive: bool,
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Color modifier: "success", "warning", "danger", "info", "accent"
    #[prop(optional)]
    variant: &'static str,
    #[prop(optional)]
    change: Option<StatChange>,
) -> impl IntoView {
    let class = if variant.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{}", variant)
    };

    let change_view = change.map(|c| {
        let (cls, trend) = if c.positive {
            ("stat-card__change stat-card__change--up", "trending-up")
        } else {
            ("stat-card__change stat-card__change--down", "trending-down")
        };
        view! {
            <div class=cls>
                {icon(trend)}
                <span>{c.text}</span>
                <span class="stat-card__change-period">" desde el mes pasado"</span>
            </div>
        }
    });

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {change_view}
            </div>
        </div>
    }
}
