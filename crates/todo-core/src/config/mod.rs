//! Client configuration.
//!
//! The auth and task endpoints share one API base URL. Front ends resolve it
//! from an explicit value, the `TODO_API_BASE_URL` environment variable, or
//! the local development default.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Environment variable holding the API base URL.
pub const API_BASE_URL_ENV: &str = "TODO_API_BASE_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Resolved configuration shared by the auth gateway and the task client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    api_base_url: String,
}

impl ClientConfig {
    /// Builds a config for an explicit API base URL.
    pub fn new(api_base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url.as_ref())?,
        })
    }

    /// Resolves the base URL from the first non-empty candidate.
    ///
    /// Candidates are checked in order: `explicit`, then `from_env`, then
    /// [`DEFAULT_API_BASE_URL`].
    pub fn resolve(explicit: Option<String>, from_env: Option<String>) -> Result<Self> {
        let url = non_blank(explicit)
            .or_else(|| non_blank(from_env))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self::new(url)
    }

    /// Resolves the base URL from the process environment.
    pub fn from_env(explicit: Option<String>) -> Result<Self> {
        Self::resolve(explicit, std::env::var(API_BASE_URL_ENV).ok())
    }

    /// Returns the normalized base URL, without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Joins a route such as `/todos` onto the base URL.
    pub fn endpoint(&self, route: &str) -> String {
        format!("{}{}", self.api_base_url, route)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

fn non_blank(candidate: Option<String>) -> Option<String> {
    candidate
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must not be empty",
        ));
    }
    if !["http://", "https://"]
        .iter()
        .any(|scheme| base.starts_with(scheme))
    {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must include http:// or https://",
        ));
    }
    Ok(base.to_string())
}
