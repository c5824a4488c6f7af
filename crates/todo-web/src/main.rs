//! Todo Web Application
//!
//! Browser entrypoint for the Dioxus web front end.

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(any(target_arch = "wasm32", test))]
mod config;
#[cfg(target_arch = "wasm32")]
mod routes;
#[cfg(target_arch = "wasm32")]
mod services;
#[cfg(target_arch = "wasm32")]
mod state;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(target_arch = "wasm32")]
fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).ok();

    tracing::info!("Starting todo web client...");
    dioxus::launch(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    println!("todo-web runs in the browser. Try: dx serve -p todo-web --platform web");
}
