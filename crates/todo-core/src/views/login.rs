//! Login / register form state

use crate::auth::{validate_login_request, LoginRequest, Registration};
use crate::error::ApiError;
use crate::models::Credential;
use crate::router::Page;

use super::{BusyGuard, Notice};

const REGISTERED_MESSAGE: &str = "Registration successful! Please log in.";
const REDIRECT_FAILED_MESSAGE: &str = "Failed to process Google login. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Register,
}

impl FormMode {
    pub const fn page(self) -> Page {
        match self {
            Self::Login => Page::Login,
            Self::Register => Page::Register,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "Switch to Register",
            Self::Register => "Switch to Login",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    mode: FormMode,
    error: Option<String>,
    notice: Notice,
    busy: BusyGuard,
}

impl LoginForm {
    pub fn new(mode: FormMode) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            mode,
            error: None,
            notice: Notice::default(),
            busy: BusyGuard::default(),
        }
    }

    /// Form for the `/login` or `/register` page.
    pub fn for_page(page: Page) -> Self {
        if page == Page::Register {
            Self::new(FormMode::Register)
        } else {
            Self::new(FormMode::Login)
        }
    }

    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn notice(&self) -> &Notice {
        &self.notice
    }

    /// Clears the success message if it is still the one shown at `generation`.
    pub fn expire_notice(&mut self, generation: u64) -> bool {
        self.notice.expire(generation)
    }

    pub const fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Fills the email after a registration and switches to login mode.
    pub fn prefill(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.mode = FormMode::Login;
    }

    /// Flips between login and register. Returns the page whose history
    /// entry replaces the current one.
    pub fn toggle_mode(&mut self) -> Page {
        self.mode = match self.mode {
            FormMode::Login => {
                self.password.clear();
                FormMode::Register
            }
            FormMode::Register => FormMode::Login,
        };
        self.error = None;
        self.notice.clear();
        self.mode.page()
    }

    /// Validates the inputs and claims the busy slot.
    ///
    /// Returns `None` (with the error text set) when validation fails, or when
    /// a submission is already in flight.
    pub fn submit(&mut self) -> Option<LoginRequest> {
        if self.busy.is_busy() {
            return None;
        }
        match validate_login_request(&self.email, &self.password) {
            Ok(request) => {
                self.error = None;
                self.busy.try_acquire();
                Some(request)
            }
            Err(error) => {
                self.error = Some(error.user_message());
                None
            }
        }
    }

    /// Applies a login response. Returns the credential to hand to the router.
    pub fn complete_login(
        &mut self,
        result: Result<Credential, ApiError>,
    ) -> Option<Credential> {
        self.busy.release();
        match result {
            Ok(credential) => {
                self.error = None;
                Some(credential)
            }
            Err(error) => {
                tracing::warn!("Login failed: {}", error);
                self.error = Some(error.user_message());
                None
            }
        }
    }

    /// Applies a register response.
    ///
    /// On success the password is cleared, the form switches to login mode and
    /// the registered email is returned so the caller can remember it.
    pub fn complete_register(
        &mut self,
        result: Result<Registration, ApiError>,
    ) -> Option<String> {
        self.busy.release();
        match result {
            Ok(registration) => {
                self.error = None;
                self.password.clear();
                self.prefill(registration.email.clone());
                self.notice.show(REGISTERED_MESSAGE);
                Some(registration.email)
            }
            Err(error) => {
                tracing::warn!("Registration failed: {}", error);
                self.error = Some(error.user_message());
                None
            }
        }
    }

    /// Records a failure while consuming a redirect token.
    pub fn fail_redirect(&mut self, error: &ApiError) {
        tracing::error!("Failed to process third-party sign-in: {}", error);
        self.error = Some(REDIRECT_FAILED_MESSAGE.to_string());
    }
}
