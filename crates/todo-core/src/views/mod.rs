//! Framework-free view state.
//!
//! Each controller holds the ephemeral state of one view (form inputs,
//! messages, in-flight flag). Front ends create a fresh controller on every
//! mount, read it to render, and feed API results back into it.

mod busy;
mod login;
mod notice;
mod task_board;

pub use busy::BusyGuard;
pub use login::{FormMode, LoginForm};
pub use notice::{Notice, NOTICE_TTL};
pub use task_board::TaskBoard;
