//! A single task, shown as text or as the inline editor

use dioxus::prelude::*;

use todo_core::views::TaskBoard;
use todo_core::Task;

use crate::state::AppState;

#[component]
pub fn TaskRow(task: Task, mut board: Signal<TaskBoard>) -> Element {
    let state = use_context::<AppState>();
    let navigator = use_navigator();

    let (is_editing, busy, edit_text) = {
        let current = board.read();
        (
            current.editing() == Some(task.id),
            current.is_busy(),
            current.edit_text.clone(),
        )
    };

    if is_editing {
        let on_save = move |_: MouseEvent| {
            let command = board.write().begin_update();
            if let Some(command) = command {
                state.run_task_command(board, navigator, command);
            }
        };

        return rsx! {
            li {
                class: "task-row",

                input {
                    class: "input task-edit",
                    r#type: "text",
                    value: "{edit_text}",
                    disabled: busy,
                    oninput: move |evt| board.write().edit_text = evt.value(),
                }

                button {
                    class: "button button-primary",
                    disabled: busy,
                    onclick: on_save,
                    if busy { "Saving..." } else { "Save" }
                }

                button {
                    class: "button button-muted",
                    disabled: busy,
                    onclick: move |_| {
                        board.write().cancel_edit();
                    },
                    "Cancel"
                }
            }
        };
    }

    let id = task.id;
    let edit_target = task.clone();
    let on_delete = move |_: MouseEvent| {
        let command = board.write().begin_delete(id);
        if let Some(command) = command {
            state.run_task_command(board, navigator, command);
        }
    };

    rsx! {
        li {
            class: "task-row",

            span { class: "task-text", "{task.task}" }

            div {
                class: "task-actions",

                button {
                    class: "button button-warning",
                    disabled: busy,
                    onclick: move |_| {
                        board.write().begin_edit(&edit_target);
                    },
                    "Edit"
                }

                button {
                    class: "button button-danger",
                    disabled: busy,
                    onclick: on_delete,
                    "Delete"
                }
            }
        }
    }
}
