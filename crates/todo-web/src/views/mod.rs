//! Routed views

mod auth;
mod dashboard;
mod home;

pub use auth::{Login, Register};
pub use dashboard::Dashboard;
pub use home::Home;
