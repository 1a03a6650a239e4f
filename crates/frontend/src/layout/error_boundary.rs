use leptos::prelude::*;

use super::navigator::use_navigator;

/// Replaces its subtree with a recovery panel when anything below renders `Err`
#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <ErrorBoundary fallback=move |errors| {
            let navigator = navigator.clone();
            let details = move || {
                errors
                    .get()
                    .into_iter()
                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                    .collect_view()
            };
            log::error!("render failure caught by error boundary");
            view! {
                <div class="error-panel" role="alert">
                    <h3 class="error-panel__title">"Something went wrong"</h3>
                    <ul class="error-panel__details">{details}</ul>
                    <button
                        class="button button--primary"
                        on:click=move |_| navigator.reload_page()
                    >
                        "Reload"
                    </button>
                </div>
            }
        }>
            {children()}
        </ErrorBoundary>
    }
}
