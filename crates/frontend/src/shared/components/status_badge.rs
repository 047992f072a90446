use crate::shared::icons::icon;
use contracts::shared::status::{Coded, StatusTable};
use leptos::prelude::*;

/// Colored badge for any status-like value; unknown codes render neutral
/// with the raw code as text
#[component]
pub fn StatusBadge<S: StatusTable + Send + Sync>(
    value: Coded<S>,
    /// Render the icon of the status in front of the label
    #[prop(optional)]
    with_icon: bool,
) -> impl IntoView {
    let class = value.tone().css_class();
    let label = value.label().to_string();
    let icon_name = value.icon();

    view! {
        <span class=class>
            {with_icon.then(|| icon(icon_name))}
            {label}
        </span>
    }
}
