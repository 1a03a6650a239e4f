use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// One entry of the tab strip. Clicking activates it, the cross closes it.
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let TabData { key, title } = tab;

    let active_key = key.clone();
    let is_active = Memo::new(move |_| {
        ctx.active
            .with(|active| active.as_deref() == Some(active_key.as_str()))
    });

    let click_key = key.clone();
    let close_key = key;
    let title_attr = title.clone();
    let on_close = move |ev: ev::MouseEvent| {
        // the strip entry itself would re-activate the tab
        ev.stop_propagation();
        ctx.close_tab(&close_key);
    };

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=move |_| ctx.activate_tab(&click_key)
        >
            <span class="tab__title" title=title_attr>{title}</span>
            <button class="tab-close" on:click=on_close title="Close">
                {icon("x")}
            </button>
        </div>
    }
}
