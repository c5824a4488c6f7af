//! CLI session persistence with secure keychain storage.

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Mutex, OnceLock};

#[cfg(not(test))]
use keyring::Entry;

use todo_core::session::SessionStore;
use todo_core::{ApiError, ClientConfig, Credential, Result};

#[cfg(not(test))]
const KEYRING_SERVICE_NAME: &str = "todo-cli";

/// Session store keyed by API base URL, so each server keeps its own token.
#[derive(Debug, Clone)]
pub struct KeyringSessionStore {
    username: String,
}

impl KeyringSessionStore {
    pub fn for_config(config: &ClientConfig) -> Self {
        Self {
            username: format!("access_token:{}", config.api_base_url()),
        }
    }

    #[cfg(test)]
    fn test_store() -> &'static Mutex<HashMap<String, String>> {
        static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
        STORE.get_or_init(|| Mutex::new(HashMap::new()))
    }

    #[cfg(not(test))]
    fn entry(&self) -> Result<Entry> {
        Entry::new(KEYRING_SERVICE_NAME, &self.username)
            .map_err(|error| ApiError::Storage(error.to_string()))
    }
}

impl SessionStore for KeyringSessionStore {
    #[cfg(not(test))]
    fn get(&self) -> Result<Option<Credential>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => Ok(Credential::new(raw)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(ApiError::Storage(error.to_string())),
        }
    }

    #[cfg(test)]
    fn get(&self) -> Result<Option<Credential>> {
        let store = Self::test_store();
        let guard = store
            .lock()
            .map_err(|error| ApiError::Storage(error.to_string()))?;
        Ok(guard.get(&self.username).cloned().and_then(Credential::new))
    }

    #[cfg(not(test))]
    fn set(&self, credential: &Credential) -> Result<()> {
        self.entry()?
            .set_password(credential.as_str())
            .map_err(|error| ApiError::Storage(error.to_string()))
    }

    #[cfg(test)]
    fn set(&self, credential: &Credential) -> Result<()> {
        let store = Self::test_store();
        let mut guard = store
            .lock()
            .map_err(|error| ApiError::Storage(error.to_string()))?;
        guard.insert(self.username.clone(), credential.as_str().to_string());
        Ok(())
    }

    #[cfg(not(test))]
    fn clear(&self) -> Result<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(ApiError::Storage(error.to_string())),
        }
    }

    #[cfg(test)]
    fn clear(&self) -> Result<()> {
        let store = Self::test_store();
        let mut guard = store
            .lock()
            .map_err(|error| ApiError::Storage(error.to_string()))?;
        guard.remove(&self.username);
        Ok(())
    }
}
