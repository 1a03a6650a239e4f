//! Access token persisted in `localStorage` by the login flow.
//!
//! This client never writes the token itself; it only reads it to build the
//! `Authorization` header.

const ACCESS_TOKEN_KEY: &str = "access_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn get_access_token() -> Option<String> {
    local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.trim().is_empty())
}
