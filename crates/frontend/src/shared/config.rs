//! Runtime settings shared by list pages and the HTTP layer.

use leptos::prelude::*;

use super::api_utils::api_base;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, e.g. `http://localhost:3000`
    pub api_base: String,
    /// Pause after the last keystroke before a typeahead search fires
    pub search_debounce_ms: u32,
    pub default_page_size: usize,
    /// Trimmed query length from which typeahead searches are issued
    pub min_search_len: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            search_debounce_ms: 400,
            default_page_size: 10,
            min_search_len: 3,
        }
    }
}

impl AppConfig {
    /// Settings for the running page; the API base comes from the
    /// compile-time override or the window location.
    pub fn load() -> Self {
        let config = Self {
            api_base: api_base(),
            ..Self::default()
        };
        log::debug!("app config: {:?}", config);
        config
    }
}

/// Config from context, defaults when none was provided (isolated components)
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_list_page_conventions() {
        let c = AppConfig::default();
        assert_eq!(c.default_page_size, 10);
        assert_eq!(c.search_debounce_ms, 400);
        assert_eq!(c.min_search_len, 3);
    }
}
