//! PageFrame, the root wrapper for every page rendered inside a tab.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a001_screen--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_FORM => "page page--form",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
