//! Access to the browser location.

use wasm_bindgen::JsValue;

/// Query string of the current page, including the leading `?`.
pub fn current_query() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Path of the current page, such as `/login`.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

/// Swaps the current history entry for `path`, dropping its query, without
/// adding a new entry.
pub fn replace_location(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let replaced = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(path)));
    if let Err(error) = replaced {
        tracing::error!("Failed to replace location with {}: {:?}", path, error);
    }
}

/// Leaves the app for an external page, such as the third-party sign-in.
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        tracing::error!("No window available to open {}", url);
        return;
    };
    if let Err(error) = window.location().set_href(url) {
        tracing::error!("Failed to open {}: {:?}", url, error);
    }
}
