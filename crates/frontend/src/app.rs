use crate::layout::error_boundary::AppErrorBoundary;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::navigator::{NavigatorHandle, TabNavigator};
use crate::layout::tabs::TabPage;
use crate::layout::toast_service::{ToastHost, ToastService};
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

/// Main application layout: sidebar plus one page per opened tab.
///
/// Restores the active tab from the URL (`?active=...`) and keeps it in sync.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn App() -> impl IntoView {
    let tabs_store = AppGlobalContext::new();
    provide_context(tabs_store);
    provide_context(AppConfig::load());
    provide_context(ToastService::new());
    provide_context(NavigatorHandle::new(TabNavigator::new(tabs_store)));

    view! {
        <AppErrorBoundary>
            <MainLayout />
        </AppErrorBoundary>
        <ToastHost />
    }
}
