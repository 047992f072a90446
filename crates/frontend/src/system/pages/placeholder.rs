use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;

/// Section that exists in the menu but has no content yet
#[component]
pub fn PlaceholderPage(
    page_id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    icon_name: &'static str,
) -> impl IntoView {
    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <span class="page__subtitle">{subtitle}</span>
                </div>
            </div>
            <div class="page__content">
                <div class="empty-state">
                    <div class="empty-state__icon">{icon(icon_name)}</div>
                    <p>"Esta sección estará disponible próximamente."</p>
                </div>
            </div>
        </PageFrame>
    }
}
