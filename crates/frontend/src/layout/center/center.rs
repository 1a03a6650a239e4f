use super::tabs::tab::Tab;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Tab strip plus the content zone holding every opened tab
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tab-strip">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab: &TabData| tab.key.clone()
                    children=move |tab: TabData| view! { <Tab tab=tab /> }
                />
            </div>
            <Show when=move || tabs_store.opened.with(|tabs| tabs.is_empty())>
                <div class="tabs__empty">"Pick a section in the sidebar to get started."</div>
            </Show>
            {children()}
        </div>
    }
}
