//! UI components

mod logout;
mod status;
mod task_panel;
mod task_row;

pub use logout::LogoutButton;
pub use status::{schedule_notice_expiry, StatusMessages};
pub use task_panel::TaskPanel;
pub use task_row::TaskRow;
