//! Session store contract.
//!
//! A session store keeps the single bearer credential of the current user.
//! Front ends provide the durable backend (browser `localStorage`, the OS
//! keyring); [`MemorySessionStore`] is the in-process implementation.

use std::sync::{Arc, Mutex};

use crate::error::{ApiError, Result};
use crate::models::Credential;

/// Durable holder of the current credential.
///
/// Validity is decided by the server; the store tracks no expiry.
pub trait SessionStore: Clone + 'static {
    fn get(&self) -> Result<Option<Credential>>;
    fn set(&self, credential: &Credential) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Session store kept in process memory. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<Credential>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a credential.
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(credential))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<Credential>> {
        let guard = self
            .slot
            .lock()
            .map_err(|error| ApiError::Storage(error.to_string()))?;
        Ok(guard.clone())
    }

    fn set(&self, credential: &Credential) -> Result<()> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|error| ApiError::Storage(error.to_string()))?;
        *guard = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|error| ApiError::Storage(error.to_string()))?;
        *guard = None;
        Ok(())
    }
}
