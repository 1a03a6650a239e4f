use crate::shared::icons::icon;
use crate::shared::list_query::range_label;
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Buttons emit the *requested* page as a signed index; the host decides
/// through `ListQuery::go_to_page` whether the request is honoured.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items across all pages
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback with the requested page
    on_page_change: Callback<i64>,
) -> impl IntoView {
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get_untracked() as i64 - 1)
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || range_label(current_page.get(), page_size.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get_untracked() as i64 + 1)
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
