//! Auth gateway client: email/password login and registration, plus the
//! third-party sign-in redirect.
//!
//! The gateway only returns data. Persisting a credential is the caller's job
//! (see [`crate::router::SessionRouter::sign_in`]).

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::api::{self, ApiTransport};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::models::Credential;

/// Query parameter carrying the credential on the redirect return leg.
pub const REDIRECT_TOKEN_PARAM: &str = "token";

const THIRD_PARTY_ROUTE: &str = "/auth/google";

/// Email/password pair submitted to login or register.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    #[serde(rename = "username")]
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Successful registration. The caller prefills the login form; there is no
/// automatic sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub message: Option<String>,
}

#[derive(Clone)]
pub struct AuthGatewayClient {
    transport: ApiTransport,
}

impl AuthGatewayClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: ApiTransport::new(config)?,
        })
    }

    /// Exchanges email and password for a credential.
    ///
    /// Invalid input is rejected before any request is made.
    pub async fn login(&self, email: &str, password: &str) -> Result<Credential> {
        let request = validate_login_request(email, password)?;
        tracing::debug!("POST /login for {}", request.email);

        let response = api::send(
            self.transport
                .client()
                .post(self.transport.endpoint("/login"))
                .json(&request),
            "Login failed",
        )
        .await?;
        let payload = api::read_json::<LoginResponse>(response).await?;
        let credential = payload
            .access_token
            .and_then(Credential::new)
            .ok_or_else(|| ApiError::Decode("login response had no access_token".to_string()))?;

        tracing::info!("Signed in as {}", request.email);
        Ok(credential)
    }

    /// Creates an account. Any 2xx response counts as success.
    pub async fn register(&self, email: &str, password: &str) -> Result<Registration> {
        let request = validate_login_request(email, password)?;
        tracing::debug!("POST /register for {}", request.email);

        let response = api::send(
            self.transport
                .client()
                .post(self.transport.endpoint("/register"))
                .json(&request),
            "Registration failed",
        )
        .await?;
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<RegisterResponse>(&body)
            .ok()
            .and_then(|payload| payload.message);

        tracing::info!("Registered {}", request.email);
        Ok(Registration {
            email: request.email,
            message,
        })
    }

    /// URL of the third-party consent page. Front ends navigate the whole
    /// window there; it is never fetched as an API call.
    pub fn redirect_url(&self) -> String {
        self.transport.endpoint(THIRD_PARTY_ROUTE)
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    message: Option<String>,
}

/// Checks both fields and the email shape.
pub fn validate_login_request(email: &str, password: &str) -> Result<LoginRequest> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }
    if !is_valid_email(email) {
        return Err(ApiError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(LoginRequest::new(email, password))
}

/// Basic `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
    EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^[\w\-.]+@([\w-]+\.)+[\w-]{2,4}$").expect("Invalid regex"))
        .is_match(email)
}

/// Extracts the credential delivered by the redirect return leg.
///
/// Accepts a full URL (`https://app/login?token=abc`), a query string
/// (`?token=abc`) or bare pairs (`token=abc`).
pub fn credential_from_redirect(input: &str) -> Option<Credential> {
    let input = input.trim();
    let query = match url::Url::parse(input) {
        Ok(parsed) => parsed.query().unwrap_or_default().to_string(),
        Err(_) => input.trim_start_matches('?').to_string(),
    };

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == REDIRECT_TOKEN_PARAM)
        .and_then(|(_, value)| Credential::new(value.into_owned()))
}
