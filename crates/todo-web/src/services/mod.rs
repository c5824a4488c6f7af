//! Browser services

mod location;
mod session_store;

pub use location::{current_path, current_query, open_external, replace_location};
pub use session_store::LocalStorageSessionStore;
