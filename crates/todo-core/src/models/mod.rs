//! Data models for the todo client

mod credential;
mod task;

pub use credential::Credential;
pub use task::{CreatedTask, Task, TaskId};
