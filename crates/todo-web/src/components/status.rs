//! Inline error and success messages

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use todo_core::views::NOTICE_TTL;

#[component]
pub fn StatusMessages(error: Option<String>, notice: Option<String>) -> Element {
    rsx! {
        if let Some(error) = error {
            p { class: "message message-error", "{error}" }
        }
        if let Some(notice) = notice {
            p { class: "message message-success", "{notice}" }
        }
    }
}

/// Clears a success notice after [`NOTICE_TTL`] unless a newer one replaced it.
///
/// `expire` receives the generation returned when the notice was shown.
pub fn schedule_notice_expiry(generation: u64, mut expire: impl FnMut(u64) -> bool + 'static) {
    let delay_ms = u32::try_from(NOTICE_TTL.as_millis()).unwrap_or(u32::MAX);
    spawn(async move {
        TimeoutFuture::new(delay_ms).await;
        if expire(generation) {
            tracing::debug!("Notice {} expired", generation);
        }
    });
}
