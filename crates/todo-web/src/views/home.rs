//! Home view - public landing page

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "page",

            div {
                class: "card card-wide",

                h1 { class: "title title-large", "Welcome to Todo App" }

                p {
                    class: "lead",
                    "Organize your tasks efficiently with our Todo App! Create, manage, and track your daily tasks with ease. Sign up to start building your personalized todo list or log in to access your existing tasks."
                }

                div {
                    class: "actions",
                    Link { class: "button button-primary", to: Route::Login {}, "Login" }
                    Link { class: "button button-secondary", to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
