//! Main application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::AppState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root application component
#[component]
pub fn App() -> Element {
    let state = use_context_provider(AppState::mount);

    // Validate a stored credential once per page load
    use_hook(move || state.validate_stored_session());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "app-container",
            Router::<Route> {}
        }
    }
}
