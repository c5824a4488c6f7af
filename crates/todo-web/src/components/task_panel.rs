//! Task input and list

use dioxus::prelude::*;

use todo_core::views::TaskBoard;

use super::{StatusMessages, TaskRow};
use crate::state::AppState;

#[component]
pub fn TaskPanel(mut board: Signal<TaskBoard>) -> Element {
    let state = use_context::<AppState>();
    let navigator = use_navigator();

    let on_add = move |_: MouseEvent| {
        let command = board.write().begin_create();
        if let Some(command) = command {
            state.run_task_command(board, navigator, command);
        }
    };

    let snapshot = board.read().clone();
    let busy = snapshot.is_busy();
    let adding = busy && snapshot.editing().is_none();

    rsx! {
        div {
            class: "task-input",

            input {
                class: "input",
                r#type: "text",
                placeholder: "Add a new task",
                value: "{snapshot.new_task}",
                disabled: busy,
                oninput: move |evt| board.write().new_task = evt.value(),
            }

            button {
                class: "button button-success button-block",
                disabled: busy,
                onclick: on_add,
                if adding { "Adding..." } else { "Add Task" }
            }
        }

        StatusMessages {
            error: snapshot.error().map(str::to_string),
            notice: snapshot.notice().text().map(str::to_string),
        }

        if snapshot.tasks().is_empty() {
            p { class: "empty", "No tasks yet." }
        }

        ul {
            class: "task-list",
            for task in snapshot.tasks().as_slice().iter().cloned() {
                TaskRow { key: "{task.id}", task, board }
            }
        }
    }
}
