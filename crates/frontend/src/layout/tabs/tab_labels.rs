//! Tab labels, the one place where tab keys get their human titles.

pub const SCREENS: &str = "a001_screen";
pub const SCREEN_NEW: &str = "a001_screen_new";
pub const SCREEN_DETAIL_PREFIX: &str = "a001_screen_detail_";
pub const COMPANIES: &str = "a002_company";
pub const COMPANY_ADD_USER_PREFIX: &str = "a002_company_add_user_";
pub const CONTRACT_NEW: &str = "a003_contract_new";
pub const USER_NEW: &str = "sys_user_new";

/// Readable title for a static tab key. Fallback: empty string.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Aggregates ───────────────────────────────────────────────────
        SCREENS => "Screens",
        SCREEN_NEW => "Add screen",
        COMPANIES => "Companies",
        CONTRACT_NEW => "New contract",

        // ── System ───────────────────────────────────────────────────────
        USER_NEW => "New user",

        _ => "",
    }
}

/// Title of a detail tab: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

pub fn screen_detail_key(id: i64) -> String {
    format!("{}{}", SCREEN_DETAIL_PREFIX, id)
}

pub fn company_add_user_key(id: i64) -> String {
    format!("{}{}", COMPANY_ADD_USER_PREFIX, id)
}

/// Numeric id encoded after `prefix`, if the key carries one
pub fn id_after(key: &str, prefix: &str) -> Option<i64> {
    key.strip_prefix(prefix)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_keys_have_labels() {
        for key in [SCREENS, SCREEN_NEW, COMPANIES, CONTRACT_NEW, USER_NEW] {
            assert!(!tab_label_for_key(key).is_empty(), "{key}");
        }
        assert_eq!(tab_label_for_key("unknown"), "");
    }

    #[test]
    fn detail_keys_round_trip_their_id() {
        assert_eq!(id_after(&screen_detail_key(42), SCREEN_DETAIL_PREFIX), Some(42));
        assert_eq!(id_after(&company_add_user_key(7), COMPANY_ADD_USER_PREFIX), Some(7));
        assert_eq!(id_after("a001_screen_detail_abc", SCREEN_DETAIL_PREFIX), None);
        assert_eq!(id_after(SCREENS, SCREEN_DETAIL_PREFIX), None);
    }
}
