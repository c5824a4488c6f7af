//! Error types for todo-core

use thiserror::Error;

/// Result type alias using todo-core's `ApiError`
pub type Result<T> = std::result::Result<T, ApiError>;

const NETWORK_ERROR_MESSAGE: &str = "Network error. Is the backend running?";
const UNAUTHORIZED_MESSAGE: &str = "Invalid or missing token. Please log in again.";
const DECODE_ERROR_MESSAGE: &str = "Unexpected response from the server. Please try again.";

/// Errors surfaced by the auth gateway, the task client and the session store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Input rejected locally, no request was made
    #[error("{0}")]
    Validation(String),

    /// No response was received
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("{message}")]
    Server { status: u16, message: String },

    /// 401/422 on a credential-scoped call
    #[error("Authorization failed ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// 2xx response whose body could not be understood
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Session store backend failure
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl ApiError {
    /// Text shown in the error region of the current view.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::Server { message, .. } => message.clone(),
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Unauthorized { .. } => UNAUTHORIZED_MESSAGE.to_string(),
            Self::Decode(_) => DECODE_ERROR_MESSAGE.to_string(),
            Self::Storage(_) | Self::InvalidConfiguration(_) => self.to_string(),
        }
    }

    /// Whether the failure forces navigation away from a protected view.
    pub const fn ends_session(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::Network(_))
    }

    /// Whether the stored credential must be dropped.
    pub const fn revokes_credential(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Promote a 401/422 server failure to `Unauthorized`.
    #[must_use]
    pub fn into_session_error(self) -> Self {
        match self {
            Self::Server { status, message } if is_authorization_status(status) => {
                Self::Unauthorized { status, message }
            }
            other => other,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

/// Statuses the task API uses to reject a missing, expired or malformed token.
pub const fn is_authorization_status(status: u16) -> bool {
    matches!(status, 401 | 422)
}
