//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a001_screen--list"`) and a
//! `data-page-category` holding one of the constants below.

/// Paged records with search.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only view of one record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Create form or wizard.
pub const PAGE_CAT_FORM: &str = "form";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_need_entity_and_category() {
        assert!(is_valid_page_id("a001_screen--list"));
        assert!(!is_valid_page_id("a001_screen"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_screen--"));
    }
}
