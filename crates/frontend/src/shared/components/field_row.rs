use leptos::prelude::*;

/// Label/value row of a detail card
#[component]
pub fn FieldRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="detail-field">
            <span class="detail-field__label">{label}</span>
            <span class="detail-field__value">{value}</span>
        </div>
    }
}
