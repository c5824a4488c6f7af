//! Login and register views
//!
//! Both routes render the same form; the mode only changes the submit call
//! and the labels.

use dioxus::prelude::*;

use todo_core::router::has_redirect_token;
use todo_core::views::{FormMode, LoginForm};

use crate::components::{schedule_notice_expiry, StatusMessages};
use crate::routes::{use_route_guard, Route};
use crate::services::{current_query, open_external};
use crate::state::AppState;

#[component]
pub fn Login() -> Element {
    rsx! {
        AuthForm { mode: FormMode::Login }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        AuthForm { mode: FormMode::Register }
    }
}

#[component]
fn AuthForm(mode: FormMode) -> Element {
    let state = use_context::<AppState>();
    let mut router = state.router;
    let navigator = use_navigator();
    let allowed = use_route_guard(mode.page());

    let redirect_error = state.redirect_error.clone();
    let mut form = use_signal(move || {
        let mut form = LoginForm::new(mode);
        if mode == FormMode::Login {
            if let Some(email) = router.peek().registered_email() {
                form.prefill(email);
            }
            // The token stays in the URL only when storing it failed at mount
            if let Some(error) = redirect_error.filter(|_| has_redirect_token(&current_query())) {
                form.fail_redirect(&error);
            }
        }
        form
    });

    let submit_state = state.clone();
    let on_submit = move |_: MouseEvent| {
        let request = form.write().submit();
        let Some(request) = request else {
            return;
        };
        let current_mode = form.peek().mode();
        let gateway = submit_state.gateway();

        spawn(async move {
            match current_mode {
                FormMode::Login => {
                    let result = match gateway {
                        Ok(gateway) => gateway.login(&request.email, &request.password).await,
                        Err(error) => Err(error),
                    };
                    let credential = form.write().complete_login(result);
                    let Some(credential) = credential else {
                        return;
                    };
                    let signed_in = router.write().sign_in(credential);
                    match signed_in {
                        Ok(page) => {
                            navigator.replace(Route::from(page));
                        }
                        Err(error) => {
                            form.write().complete_login(Err(error));
                        }
                    }
                }
                FormMode::Register => {
                    let result = match gateway {
                        Ok(gateway) => gateway.register(&request.email, &request.password).await,
                        Err(error) => Err(error),
                    };
                    let registered = form.write().complete_register(result);
                    if let Some(email) = registered {
                        router.write().remember_registration(email);
                        let generation = form.peek().notice().generation();
                        schedule_notice_expiry(generation, move |generation| {
                            form.write().expire_notice(generation)
                        });
                    }
                }
            }
        });
    };

    let on_google = move |_: MouseEvent| match state.gateway() {
        Ok(gateway) => open_external(&gateway.redirect_url()),
        Err(error) => form.write().fail_redirect(&error),
    };

    let on_toggle = move |_: MouseEvent| {
        let page = form.write().toggle_mode();
        navigator.replace(Route::from(page));
    };

    if !allowed {
        return rsx! {};
    }

    let snapshot = form.read().clone();
    let current_mode = snapshot.mode();
    let busy = snapshot.is_busy();

    rsx! {
        div {
            class: "page",

            div {
                class: "card",

                h1 { class: "title", "{current_mode.title()}" }

                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{snapshot.email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }

                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{snapshot.password}",
                    oninput: move |evt| form.write().password = evt.value(),
                }

                StatusMessages {
                    error: snapshot.error().map(str::to_string),
                    notice: snapshot.notice().text().map(str::to_string),
                }

                button {
                    class: "button button-primary button-block",
                    disabled: busy,
                    onclick: on_submit,
                    "{current_mode.title()}"
                }

                button {
                    class: "button button-google button-block",
                    disabled: busy,
                    onclick: on_google,
                    "Sign in with Google"
                }

                button {
                    class: "button-link button-block",
                    onclick: on_toggle,
                    "{current_mode.toggle_label()}"
                }
            }
        }
    }
}
