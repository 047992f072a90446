//! Sidebar with collapsible menu groups

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::shared::route::Route;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    label: &'static str,
    icon: &'static str,
    href: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn item(label: &'static str, icon: &'static str, href: &'static str) -> MenuItem {
    MenuItem { label, icon, href }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "main",
            label: "Principal",
            icon: "home",
            items: vec![
                item("Dashboard", "home", "/"),
                item("Solicitudes", "clipboard", "/requests"),
                item("Prepedidos", "shopping-cart", "/preorders"),
                item("Reportes", "bar-chart", "/reports"),
            ],
        },
        MenuGroup {
            id: "admin",
            label: "Administración",
            icon: "settings",
            items: vec![
                item("Usuarios", "users", "/users"),
                item("Configuración", "settings", "/settings"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    // Both groups start expanded
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                {icon("layout-dashboard")}
                <span>"Admin Panel"</span>
            </div>
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_click = group_id.clone();
                let group_id_for_exp = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item app-sidebar__group"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|entry| {
                                    let href = entry.href;
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.route.get().is_within(href)
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.navigate(Route::parse(href))
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(entry.icon)}
                                                <span>{entry.label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_entry_resolves_to_a_page() {
        for group in get_menu_groups() {
            for entry in group.items {
                let route = Route::parse(entry.href);
                assert!(!matches!(route, Route::NotFound(_)), "{}", entry.href);
                assert!(route.is_within(entry.href));
            }
        }
    }

    #[test]
    fn test_only_one_entry_is_active_for_a_detail_page() {
        let route = Route::PreorderEdit("3".to_string());
        let active: Vec<&str> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items)
            .filter(|i| route.is_within(i.href))
            .map(|i| i.label)
            .collect();
        assert_eq!(active, vec!["Prepedidos"]);
    }
}
