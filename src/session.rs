//! Access to the session token the login flow leaves in `localStorage`.

/// The signed-in user's bearer token, or `None` when nobody is logged in
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn stored_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage
        .get_item(crate::constants::TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

/// Outside the browser there is no session storage
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn stored_token() -> Option<String> {
    None
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::constants::TOKEN_STORAGE_KEY;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn local_storage() -> web_sys::Storage {
        web_sys::window()
            .expect("window")
            .local_storage()
            .expect("storage access")
            .expect("local storage")
    }

    #[wasm_bindgen_test]
    fn test_reads_stored_token() {
        local_storage().set_item(TOKEN_STORAGE_KEY, "abc123").expect("set token");
        assert_eq!(stored_token().as_deref(), Some("abc123"));
        local_storage().remove_item(TOKEN_STORAGE_KEY).expect("remove token");
    }

    #[wasm_bindgen_test]
    fn test_missing_or_empty_token() {
        local_storage().remove_item(TOKEN_STORAGE_KEY).expect("remove token");
        assert_eq!(stored_token(), None);

        local_storage().set_item(TOKEN_STORAGE_KEY, "").expect("set token");
        assert_eq!(stored_token(), None);
        local_storage().remove_item(TOKEN_STORAGE_KEY).expect("remove token");
    }
}
