//! Browser routes and the session guard.

use dioxus::prelude::*;

use todo_core::router::Page;

use crate::state::AppState;
use crate::views::{Dashboard, Home, Login, Register};

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Self::Home {},
            Page::Login => Self::Login {},
            Page::Register => Self::Register {},
            Page::Dashboard => Self::Dashboard {},
        }
    }
}

/// Replaces the current history entry when the session state forbids `page`.
///
/// Re-runs whenever the router signal changes, so a session dropped by a
/// background call moves the user off a protected page. Returns whether
/// `page` may render right now.
pub fn use_route_guard(page: Page) -> bool {
    let state = use_context::<AppState>();
    let router = state.router;
    let navigator = use_navigator();

    use_effect(move || {
        let resolved = router.read().resolve(page);
        if resolved != page {
            tracing::debug!("Redirecting {} to {}", page.path(), resolved.path());
            navigator.replace(Route::from(resolved));
        }
    });

    router.read().resolve(page) == page
}
