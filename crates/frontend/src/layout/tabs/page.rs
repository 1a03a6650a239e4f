//! TabPage component, the wrapper around a single tab's content.

use super::registry::render_tab_content;
use crate::layout::error_boundary::AppErrorBoundary;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the tab through `registry::render_tab_content` and hides it with
/// the `tabs__item--hidden` class while another tab is active.
///
/// Every tab gets its own error boundary so one failing page leaves the
/// others usable.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || {
        tabs_store
            .active
            .with(|active| active.as_ref() == Some(&tab_key_for_active_check))
    };

    log!("TabPage created for '{}'", tab_key);

    let tab_key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log!("TabPage destroyed for '{}'", tab_key_for_cleanup);
    });

    let content = render_tab_content(&tab_key, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            <AppErrorBoundary>{content}</AppErrorBoundary>
        </div>
    }
}
