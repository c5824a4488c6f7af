//! View routing and the authentication state machine.
//!
//! [`SessionRouter`] owns the session store and decides which page a front end
//! may show. The machine has two states and runs for the whole page session:
//!
//! - `Unauthenticated -> Authenticated`: login, a consumed redirect token, or a
//!   credential found in the store at mount.
//! - `Authenticated -> Unauthenticated`: logout, a failed startup validation, or
//!   an authorization failure reported by any task call.

use crate::auth::{credential_from_redirect, REDIRECT_TOKEN_PARAM};
use crate::error::{ApiError, Result};
use crate::models::Credential;
use crate::session::SessionStore;

/// Pages of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Register,
    Dashboard,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Maps a URL path to a page. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match trimmed {
            "" | "/" => Some(Self::Home),
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/dashboard" => Some(Self::Dashboard),
            _ => None,
        }
    }

    /// Pages reachable only with a credential.
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

/// What the front end must do right after mounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupCheck {
    /// Issue one background list call with this credential to detect staleness.
    Validate(Credential),
    /// Nothing stored, or a redirect token is being delivered.
    Skip,
}

/// Session-aware router over an injected [`SessionStore`].
#[derive(Debug, Clone)]
pub struct SessionRouter<S: SessionStore> {
    store: S,
    credential: Option<Credential>,
    consumed_redirect: Option<Credential>,
    registered_email: Option<String>,
    transitions: u32,
}

impl<S: SessionStore> SessionRouter<S> {
    /// Derives the initial state from the store.
    ///
    /// A stored credential is optimistically treated as valid. Validation is
    /// skipped when `location_query` carries a redirect token, so the check
    /// cannot race the token that flow is delivering.
    pub fn mount(store: S, location_query: &str) -> Result<(Self, StartupCheck)> {
        let credential = store.get()?;
        let redirect_in_progress = has_redirect_token(location_query);
        let check = match (&credential, redirect_in_progress) {
            (Some(credential), false) => StartupCheck::Validate(credential.clone()),
            (Some(_), true) => {
                tracing::debug!("Skipping startup validation during redirect sign-in");
                StartupCheck::Skip
            }
            (None, _) => StartupCheck::Skip,
        };
        let transitions = u32::from(credential.is_some());

        Ok((
            Self {
                store,
                credential,
                consumed_redirect: None,
                registered_email: None,
                transitions,
            },
            check,
        ))
    }

    /// Starts unauthenticated without reading the store, for front ends whose
    /// storage backend failed to load.
    pub const fn signed_out(store: S) -> Self {
        Self {
            store,
            credential: None,
            consumed_redirect: None,
            registered_email: None,
            transitions: 0,
        }
    }

    pub const fn state(&self) -> AuthState {
        if self.credential.is_some() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }

    pub const fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Number of `Unauthenticated -> Authenticated` transitions so far.
    pub const fn transitions(&self) -> u32 {
        self.transitions
    }

    /// Applies the route guards to a requested page.
    pub const fn resolve(&self, requested: Page) -> Page {
        match (requested, self.state()) {
            (page, AuthState::Unauthenticated) if page.is_protected() => Page::Login,
            (Page::Login | Page::Register, AuthState::Authenticated) => Page::Dashboard,
            (page, _) => page,
        }
    }

    /// Persists a credential from login and returns the landing page.
    pub fn sign_in(&mut self, credential: Credential) -> Result<Page> {
        self.store.set(&credential)?;
        if self.credential.is_none() {
            self.transitions += 1;
        }
        self.credential = Some(credential);
        self.registered_email = None;
        tracing::info!("Session started");
        Ok(Page::Dashboard)
    }

    /// Forgets the credential and returns the page to show.
    pub fn sign_out(&mut self) -> Result<Page> {
        self.invalidate()?;
        self.registered_email = None;
        tracing::info!("Signed out");
        Ok(Page::Login)
    }

    /// Consumes a credential delivered by the third-party redirect.
    ///
    /// Returns `Some(Dashboard)` the first time a token shows up. The caller
    /// replaces the current history entry so a reload does not carry the
    /// parameter again; a replay of the same token is ignored.
    pub fn consume_redirect(&mut self, location_query: &str) -> Result<Option<Page>> {
        let Some(credential) = credential_from_redirect(location_query) else {
            return Ok(None);
        };
        if self.consumed_redirect.as_ref() == Some(&credential) {
            tracing::debug!("Redirect token already consumed");
            return Ok(None);
        }

        tracing::info!("Consuming third-party sign-in token");
        self.consumed_redirect = Some(credential.clone());
        self.sign_in(credential).map(Some)
    }

    /// Consumes a redirect token only when the browser landed on `/login`,
    /// the page the third-party sign-in returns to.
    ///
    /// Front ends call this once at mount, before any route guard runs, so a
    /// stale stored credential cannot bounce `/login` away first.
    pub fn consume_landing_redirect(
        &mut self,
        location_path: &str,
        location_query: &str,
    ) -> Result<Option<Page>> {
        if Page::from_path(location_path) != Some(Page::Login) {
            return Ok(None);
        }
        self.consume_redirect(location_query)
    }

    /// Drops the credential after the startup validation call failed.
    pub fn startup_failed(&mut self, error: &ApiError) -> Result<()> {
        tracing::warn!("Stored credential failed validation: {}", error);
        self.invalidate()
    }

    /// Routes a failure reported by a task call.
    ///
    /// Authorization failures clear the credential. Network failures leave
    /// the protected view but keep the stored credential, which the next mount
    /// validates again. Anything else stays on the current view.
    pub fn handle_failure(&mut self, error: &ApiError) -> Result<Option<Page>> {
        if error.revokes_credential() {
            tracing::warn!("Authorization failure, clearing session: {}", error);
            self.invalidate()?;
            return Ok(Some(Page::Home));
        }
        if error.ends_session() {
            tracing::warn!("Leaving protected view after failure: {}", error);
            return Ok(Some(Page::Home));
        }
        Ok(None)
    }

    /// Remembers a freshly registered email for the login form.
    pub fn remember_registration(&mut self, email: impl Into<String>) {
        self.registered_email = Some(email.into());
    }

    pub fn registered_email(&self) -> Option<&str> {
        self.registered_email.as_deref()
    }

    fn invalidate(&mut self) -> Result<()> {
        self.credential = None;
        self.store.clear()
    }
}

/// Whether a location query marks an in-progress redirect sign-in.
pub fn has_redirect_token(location_query: &str) -> bool {
    let query = location_query.trim().trim_start_matches('?');
    url::form_urlencoded::parse(query.as_bytes())
        .any(|(name, value)| name == REDIRECT_TOKEN_PARAM && !value.trim().is_empty())
}
