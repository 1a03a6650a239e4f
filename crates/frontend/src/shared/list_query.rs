//! Paged list state shared by the screens and companies pages.
//!
//! `items` always holds the last page fetched from the server, while
//! `filtered_items` is what the table renders: the search result set while a
//! search is active, otherwise a copy of `items`.

use contracts::shared::page::{PageRequest, PageResponse};

#[derive(Debug, Clone)]
pub struct ListQuery<T> {
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_elements: usize,
    pub items: Vec<T>,
    pub filtered_items: Vec<T>,
    pub error_message: Option<String>,
    pub is_loading: bool,
    /// Label of the active search, `None` when showing the plain page
    pub search: Option<String>,
}

impl<T: Clone> ListQuery<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 0,
            page_size: page_size.max(1),
            total_pages: 0,
            total_elements: 0,
            items: Vec::new(),
            filtered_items: Vec::new(),
            error_message: None,
            is_loading: false,
            search: None,
        }
    }

    /// Query for the current page
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.current_page,
            size: self.page_size,
            search: None,
        }
    }

    /// Query for a search by label, first page
    pub fn search_request(&self, label: &str) -> PageRequest {
        PageRequest {
            page: 0,
            size: self.page_size,
            search: Some(label.to_string()),
        }
    }

    pub fn begin_load(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    pub fn apply_page(&mut self, page: PageResponse<T>) {
        self.items = page.content;
        self.total_pages = page.total_pages;
        self.total_elements = page.total_elements;
        if self.search.is_none() {
            self.filtered_items = self.items.clone();
        }
        self.is_loading = false;
        self.error_message = None;
    }

    pub fn apply_search_results(&mut self, label: &str, results: Vec<T>) {
        self.search = Some(label.to_string());
        self.filtered_items = results;
        self.is_loading = false;
        self.error_message = None;
    }

    pub fn clear_search(&mut self) {
        self.search = None;
        self.filtered_items = self.items.clone();
    }

    pub fn apply_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.is_loading = false;
    }

    /// Move to `requested` when it names another existing page.
    ///
    /// Requests outside `[0, total_pages - 1]` and requests for the current
    /// page change nothing and return `None`.
    pub fn go_to_page(&mut self, requested: i64) -> Option<usize> {
        let page = usize::try_from(requested).ok()?;
        if page >= self.total_pages || page == self.current_page {
            return None;
        }
        self.current_page = page;
        Some(page)
    }

    pub fn rendered_count(&self) -> usize {
        self.filtered_items.len()
    }
}

/// 1-based `[from, to]` of the rows on `page`, `None` when there are none
pub fn page_range(page: usize, size: usize, total: usize) -> Option<(usize, usize)> {
    let from = page.checked_mul(size)?.checked_add(1)?;
    let to = page.saturating_add(1).saturating_mul(size).min(total);
    (from <= to).then_some((from, to))
}

/// Pagination caption: `"1–10 of 42"`
pub fn range_label(page: usize, size: usize, total: usize) -> String {
    match page_range(page, size, total) {
        Some((from, to)) => format!("{}–{} of {}", from, to, total),
        None => format!("0 of {}", total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn loaded(total_pages: usize, current_page: usize) -> ListQuery<u32> {
        let mut q = ListQuery::new(10);
        q.apply_page(PageResponse {
            content: vec![1, 2, 3],
            total_pages,
            total_elements: total_pages * 10,
            page_number: current_page,
            page_size: 10,
        });
        q.current_page = current_page;
        q
    }

    #[test]
    fn range_of_a_short_single_page() {
        assert_eq!(page_range(0, 10, 4), Some((1, 4)));
        assert_eq!(range_label(0, 10, 4), "1–4 of 4");
    }

    #[test]
    fn range_of_a_last_page_with_one_row() {
        assert_eq!(page_range(2, 10, 21), Some((21, 21)));
    }

    #[test]
    fn ranges_for_four_rows_per_page_out_of_twenty_one() {
        assert_eq!(page_range(0, 4, 21), Some((1, 4)));
        assert_eq!(page_range(5, 4, 21), Some((21, 21)));
        assert_eq!(range_label(5, 4, 21), "21–21 of 21");
    }

    #[test]
    fn empty_list_has_no_range() {
        assert_eq!(page_range(0, 10, 0), None);
        assert_eq!(range_label(0, 10, 0), "0 of 0");
    }

    #[test]
    fn go_to_page_moves_within_bounds() {
        let mut q = loaded(3, 0);
        assert_eq!(q.go_to_page(1), Some(1));
        assert_eq!(q.current_page, 1);
        assert_eq!(q.go_to_page(1), None);
    }

    #[test]
    fn clearing_search_restores_the_page() {
        let mut q = loaded(1, 0);
        q.apply_search_results("Lobby", vec![42]);
        assert_eq!(q.filtered_items, vec![42]);
        assert_eq!(q.items, vec![1, 2, 3]);

        q.clear_search();
        assert_eq!(q.filtered_items, vec![1, 2, 3]);
        assert!(q.search.is_none());
    }

    #[test]
    fn errors_stop_loading_and_keep_rows() {
        let mut q = loaded(1, 0);
        q.begin_load();
        q.apply_error("boom".into());
        assert!(!q.is_loading);
        assert_eq!(q.rendered_count(), 3);
        assert_eq!(q.error_message.as_deref(), Some("boom"));
    }

    proptest! {
        #[test]
        fn out_of_range_requests_are_noops(
            total_pages in 0usize..50,
            current_seed in 0usize..50,
            overshoot in 0i64..1_000,
            negative in 1i64..1_000,
        ) {
            let current_page = if total_pages == 0 { 0 } else { current_seed % total_pages };
            let mut q = loaded(total_pages, current_page);

            prop_assert_eq!(q.go_to_page(-negative), None);
            prop_assert_eq!(q.go_to_page(total_pages as i64 + overshoot), None);
            prop_assert_eq!(q.go_to_page(current_page as i64), None);
            prop_assert_eq!(q.current_page, current_page);
        }
    }
}
