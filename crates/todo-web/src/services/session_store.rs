//! Browser session persistence using `localStorage`.

use gloo::storage::{LocalStorage, Storage};
use todo_core::session::SessionStore;
use todo_core::{ApiError, Credential, Result};

const TOKEN_STORAGE_KEY: &str = "token";

/// Session store backed by the page's `localStorage`.
/// The credential is kept under `token` as the raw string, not JSON encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSessionStore;

impl SessionStore for LocalStorageSessionStore {
    fn get(&self) -> Result<Option<Credential>> {
        let raw = LocalStorage::raw()
            .get_item(TOKEN_STORAGE_KEY)
            .map_err(|error| ApiError::Storage(format!("{error:?}")))?;
        Ok(raw.and_then(Credential::new))
    }

    fn set(&self, credential: &Credential) -> Result<()> {
        LocalStorage::raw()
            .set_item(TOKEN_STORAGE_KEY, credential.as_str())
            .map_err(|error| ApiError::Storage(format!("{error:?}")))
    }

    fn clear(&self) -> Result<()> {
        LocalStorage::raw()
            .remove_item(TOKEN_STORAGE_KEY)
            .map_err(|error| ApiError::Storage(format!("{error:?}")))
    }
}
