//! Login/register form state and submit policy.
//!
//! Both modes share one record so typed values survive a mode toggle.
//! Every required field must be non-empty after trimming; nothing reaches
//! the backend otherwise. Emails and names are sent trimmed, passwords as
//! typed.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::error::ApiError;
use crate::net::session::Session;
use crate::net::transport::HttpTransport;
use crate::net::types::{LoginRequest, RegisterRequest, User};
use crate::util::token_store::TokenStore;

pub const LOGIN_REQUIRED_MESSAGE: &str = "Enter both email and password.";
pub const REGISTER_REQUIRED_MESSAGE: &str = "Fill in first name, last name, email and password.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

impl FormMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "Need an account? Register",
            Self::Register => "Already registered? Sign in",
        }
    }

    pub fn pending_message(self) -> &'static str {
        match self {
            Self::Login => "Signing in...",
            Self::Register => "Creating account...",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FormError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(msg) => (*msg).to_owned(),
            Self::Api(e) => e.user_message(),
        }
    }
}

/// Field values for both form modes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: FormMode,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

impl AuthForm {
    /// # Errors
    ///
    /// [`FormError::Invalid`] when email or password is blank.
    pub fn login_request(&self) -> Result<LoginRequest, FormError> {
        let invalid = FormError::Invalid(LOGIN_REQUIRED_MESSAGE);
        let email = required(&self.email).ok_or(invalid.clone())?;
        if self.password.trim().is_empty() {
            return Err(invalid);
        }
        Ok(LoginRequest { email, password: self.password.clone() })
    }

    /// # Errors
    ///
    /// [`FormError::Invalid`] when any of the four fields is blank.
    pub fn register_request(&self) -> Result<RegisterRequest, FormError> {
        let invalid = FormError::Invalid(REGISTER_REQUIRED_MESSAGE);
        let (Some(first_name), Some(last_name), Some(email)) =
            (required(&self.first_name), required(&self.last_name), required(&self.email))
        else {
            return Err(invalid);
        };
        if self.password.trim().is_empty() {
            return Err(invalid);
        }
        Ok(RegisterRequest { first_name, last_name, email, password: self.password.clone() })
    }

    /// Validate the fields the current mode needs.
    ///
    /// # Errors
    ///
    /// [`FormError::Invalid`] with the mode's message.
    pub fn validate(&self) -> Result<(), FormError> {
        match self.mode {
            FormMode::Login => self.login_request().map(|_| ()),
            FormMode::Register => self.register_request().map(|_| ()),
        }
    }

    /// Validate, then log in or register through `session`.
    ///
    /// # Errors
    ///
    /// Validation failures (no request is sent) or the session's API error.
    pub async fn submit<S, T>(&self, session: &Session<S, T>) -> Result<User, FormError>
    where
        S: TokenStore,
        T: HttpTransport,
    {
        let user = match self.mode {
            FormMode::Login => session.login(&self.login_request()?).await?,
            FormMode::Register => session.register(&self.register_request()?).await?,
        };
        Ok(user)
    }
}
