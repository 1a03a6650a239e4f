//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::{COMPANIES, CONTRACT_NEW, SCREENS, SCREEN_NEW, USER_NEW};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "screens",
            label: "Screens",
            icon: "monitor",
            items: vec![
                (SCREENS, tab_label_for_key(SCREENS), "monitor"),
                (SCREEN_NEW, tab_label_for_key(SCREEN_NEW), "plus"),
            ],
        },
        MenuGroup {
            id: "customers",
            label: "Customers",
            icon: "building",
            items: vec![
                (COMPANIES, tab_label_for_key(COMPANIES), "building"),
                (CONTRACT_NEW, tab_label_for_key(CONTRACT_NEW), "file-text"),
            ],
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "users",
            items: vec![(USER_NEW, tab_label_for_key(USER_NEW), "users")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["screens".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_click = group_id.clone();
                let gid_exp = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
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
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(id)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
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
    fn every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (id, label, _) in group.items {
                assert!(!label.is_empty(), "missing label for {id}");
            }
        }
    }
}
