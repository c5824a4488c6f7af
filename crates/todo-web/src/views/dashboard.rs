//! Dashboard view - the signed-in task list

use dioxus::prelude::*;

use todo_core::router::Page;
use todo_core::views::TaskBoard;

use crate::components::{LogoutButton, TaskPanel};
use crate::routes::use_route_guard;
use crate::state::AppState;

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let navigator = use_navigator();
    let allowed = use_route_guard(Page::Dashboard);
    let board = use_signal(TaskBoard::new);

    // Initial fetch, once per mount
    use_hook(move || {
        if allowed {
            let command = board.peek().begin_refresh();
            state.run_task_command(board, navigator, command);
        }
    });

    if !allowed {
        return rsx! {};
    }

    rsx! {
        div {
            class: "page",

            div {
                class: "card",

                h1 { class: "title", "Todo Dashboard" }

                TaskPanel { board }
                LogoutButton {}
            }
        }
    }
}
