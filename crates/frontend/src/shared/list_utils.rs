//! Search utilities shared by list pages (typeahead gating, highlighting)
use async_trait::async_trait;
use leptos::prelude::*;

use super::api_utils::ApiError;

/// Trimmed length from which a query is worth sending
pub const MIN_SEARCH_LEN: usize = 3;

pub fn is_search_query(raw: &str, min_len: usize) -> bool {
    raw.trim().chars().count() >= min_len
}

/// Typeahead backend of a [`MultiSearchBar`](crate::shared::components::multi_search_bar::MultiSearchBar)
#[async_trait(?Send)]
pub trait SuggestionSource: Send + Sync {
    /// Labels matching `query`, in display order
    async fn suggest(&self, query: &str) -> Result<Vec<String>, ApiError>;
}

/// What the search box should do after a keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Query too short: drop suggestions, schedule nothing
    ClearSuggestions,
    /// Start the debounce timer for this ticket
    Schedule(u64),
}

/// Debounce and staleness bookkeeping for a typeahead box.
///
/// Every keystroke takes a new ticket, so only the timer armed by the last
/// keystroke may fire. Every issued search takes a new request id, and only
/// the response carrying the latest id is applied.
#[derive(Debug, Clone)]
pub struct SearchGate {
    min_len: usize,
    keystroke: u64,
    issued: u64,
    pending: Option<String>,
}

impl SearchGate {
    pub fn new(min_len: usize) -> Self {
        Self {
            min_len,
            keystroke: 0,
            issued: 0,
            pending: None,
        }
    }

    pub fn on_input(&mut self, raw: &str) -> InputAction {
        self.keystroke += 1;
        if is_search_query(raw, self.min_len) {
            self.pending = Some(raw.trim().to_string());
            InputAction::Schedule(self.keystroke)
        } else {
            // a short query also invalidates whatever is still in flight
            self.pending = None;
            self.issued += 1;
            InputAction::ClearSuggestions
        }
    }

    /// Timer for `ticket` elapsed; returns `(request_id, query)` to send
    pub fn on_debounce_elapsed(&mut self, ticket: u64) -> Option<(u64, String)> {
        if ticket != self.keystroke {
            return None;
        }
        let query = self.pending.take()?;
        self.issued += 1;
        Some((self.issued, query))
    }

    /// Whether a response for `request_id` may still be applied
    pub fn accepts(&self, request_id: u64) -> bool {
        request_id == self.issued
    }

    /// Enter pressed: returns the raw query to select, cancelling pending work
    pub fn on_confirm(&mut self, raw: &str) -> Option<String> {
        if !is_search_query(raw, self.min_len) {
            return None;
        }
        self.cancel();
        Some(raw.to_string())
    }

    pub fn on_clear(&mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        self.keystroke += 1;
        self.issued += 1;
        self.pending = None;
    }
}

impl Default for SearchGate {
    fn default() -> Self {
        Self::new(MIN_SEARCH_LEN)
    }
}

/// Split `text` into `(segment, is_match)` runs, case-insensitive
pub fn match_segments(text: &str, filter: &str) -> Vec<(String, bool)> {
    let filter = filter.trim();
    if filter.chars().count() < MIN_SEARCH_LEN {
        return vec![(text.to_string(), false)];
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();
    // lowercasing can change byte lengths; fall back to no highlighting then
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        if start > last_pos {
            parts.push((text[last_pos..start].to_string(), false));
        }
        let end = start + filter_lower.len();
        parts.push((text[start..end].to_string(), true));
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

/// Render `text` with every occurrence of `filter` emphasised
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    match_segments(text, filter)
        .into_iter()
        .map(|(segment, is_match)| {
            if is_match {
                view! { <mark class="search-highlight">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_never_schedule() {
        let mut gate = SearchGate::default();
        assert_eq!(gate.on_input("ab"), InputAction::ClearSuggestions);
        assert_eq!(gate.on_input("  ab  "), InputAction::ClearSuggestions);
        assert!(matches!(gate.on_input("abc"), InputAction::Schedule(_)));
    }

    #[test]
    fn only_the_last_keystroke_fires() {
        let mut gate = SearchGate::default();
        let InputAction::Schedule(first) = gate.on_input("lob") else {
            panic!("expected schedule");
        };
        let InputAction::Schedule(second) = gate.on_input("lobb") else {
            panic!("expected schedule");
        };
        assert_eq!(gate.on_debounce_elapsed(first), None);
        let (_, query) = gate.on_debounce_elapsed(second).unwrap();
        assert_eq!(query, "lobb");
        // the same ticket cannot fire twice
        assert_eq!(gate.on_debounce_elapsed(second), None);
    }

    #[test]
    fn stale_responses_are_rejected() {
        let mut gate = SearchGate::default();
        let InputAction::Schedule(t1) = gate.on_input("mall") else {
            panic!("expected schedule");
        };
        let (old_id, _) = gate.on_debounce_elapsed(t1).unwrap();
        let InputAction::Schedule(t2) = gate.on_input("mall east") else {
            panic!("expected schedule");
        };
        let (new_id, _) = gate.on_debounce_elapsed(t2).unwrap();

        assert!(!gate.accepts(old_id));
        assert!(gate.accepts(new_id));
    }

    #[test]
    fn shortening_the_query_invalidates_in_flight_search() {
        let mut gate = SearchGate::default();
        let InputAction::Schedule(t) = gate.on_input("lob") else {
            panic!("expected schedule");
        };
        let (id, _) = gate.on_debounce_elapsed(t).unwrap();
        gate.on_input("lo");
        assert!(!gate.accepts(id));
    }

    #[test]
    fn enter_selects_raw_query_and_cancels_timer() {
        let mut gate = SearchGate::default();
        let InputAction::Schedule(t) = gate.on_input("Lobby ") else {
            panic!("expected schedule");
        };
        assert_eq!(gate.on_confirm("Lobby ").as_deref(), Some("Lobby "));
        assert_eq!(gate.on_debounce_elapsed(t), None);
        assert_eq!(gate.on_confirm("Lo"), None);
    }

    #[test]
    fn segments_mark_case_insensitive_matches() {
        let parts = match_segments("Mall East Mall", "mall");
        assert_eq!(
            parts,
            vec![
                ("Mall".to_string(), true),
                (" East ".to_string(), false),
                ("Mall".to_string(), true),
            ]
        );
        assert_eq!(match_segments("Mall", "ma"), vec![("Mall".to_string(), false)]);
    }
}
