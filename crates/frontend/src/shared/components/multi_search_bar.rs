use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, InputAction, SearchGate, SuggestionSource};

/// Typeahead search box.
///
/// Queries shorter than the configured minimum never reach `source`; the
/// remaining ones are debounced and only the newest response is shown.
/// Enter selects the raw query, clicking a suggestion selects its label.
#[component]
pub fn MultiSearchBar(
    source: Arc<dyn SuggestionSource>,
    on_select: Callback<String>,
    on_clear: Callback<()>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let config = use_app_config();
    let debounce_ms = config.search_debounce_ms;

    let gate = StoredValue::new(SearchGate::new(config.min_search_len));
    let source = StoredValue::new(source);
    let query = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<String>::new());

    let handle_input = move |raw: String| {
        query.set(raw.clone());
        let action = gate.try_update_value(|g| g.on_input(&raw));
        match action {
            Some(InputAction::Schedule(ticket)) => spawn_local(async move {
                TimeoutFuture::new(debounce_ms).await;
                let Some((request_id, q)) = gate
                    .try_update_value(|g| g.on_debounce_elapsed(ticket))
                    .flatten()
                else {
                    return;
                };
                log::debug!("search #{}: '{}'", request_id, q);
                let result = source.get_value().suggest(&q).await;
                if !gate.with_value(|g| g.accepts(request_id)) {
                    log::debug!("search #{} superseded, response dropped", request_id);
                    return;
                }
                match result {
                    Ok(labels) => suggestions.set(labels),
                    Err(e) => {
                        log::error!("search '{}' failed: {}", q, e);
                        suggestions.set(Vec::new());
                    }
                }
            }),
            Some(InputAction::ClearSuggestions) | None => suggestions.set(Vec::new()),
        }
    };

    let select = move |label: String| {
        gate.update_value(|g| g.on_clear());
        suggestions.set(Vec::new());
        query.set(label.clone());
        on_select.run(label);
    };

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let raw = query.get_untracked();
        if let Some(raw) = gate.try_update_value(|g| g.on_confirm(&raw)).flatten() {
            suggestions.set(Vec::new());
            on_select.run(raw);
        }
    };

    let clear = move |_| {
        gate.update_value(|g| g.on_clear());
        query.set(String::new());
        suggestions.set(Vec::new());
        on_clear.run(());
    };

    view! {
        <div class="search-bar">
            <span class="search-bar__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-bar__input"
                placeholder=move || placeholder.get().unwrap_or_else(|| "Search...".to_string())
                prop:value=move || query.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
                on:keydown=handle_keydown
            />
            <Show when=move || !query.with(|q| q.is_empty())>
                <button class="search-bar__clear" on:click=clear title="Clear">
                    {icon("x")}
                </button>
            </Show>
            <Show when=move || !suggestions.with(|s| s.is_empty())>
                <ul class="search-bar__suggestions">
                    <For
                        each=move || suggestions.get()
                        key=|label| label.clone()
                        children=move |label: String| {
                            let text = label.clone();
                            view! {
                                <li
                                    class="search-bar__suggestion"
                                    on:click=move |_| select(label.clone())
                                >
                                    {move || highlight_matches(&text, &query.get())}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
