//! Logout button

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::AppState;

#[component]
pub fn LogoutButton() -> Element {
    let state = use_context::<AppState>();
    let mut router = state.router;
    let navigator = use_navigator();

    rsx! {
        button {
            class: "button button-danger button-block",
            onclick: move |_| {
                let signed_out = router.write().sign_out();
                match signed_out {
                    Ok(page) => {
                        navigator.push(Route::from(page));
                    }
                    Err(error) => tracing::error!("Failed to clear stored session: {}", error),
                }
            },
            "Logout"
        }
    }
}
