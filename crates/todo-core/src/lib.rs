//! todo-core - Core library for the todo client
//!
//! This crate contains the shared models, HTTP clients for the auth and task
//! endpoints, the session router and the framework-free view state used by
//! every todo interface (web, CLI).

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod session;
pub mod tasks;
pub mod views;

mod api;

pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use models::{CreatedTask, Credential, Task, TaskId};
