//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` context by `App`. The home page
//! resolves it on load; the login form and logout button replace it after
//! each call, which is what flips the page between its two views.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    /// Message from the last failed user lookup, if any.
    pub error: Option<String>,
}

impl AuthState {
    /// State before the initial current-user fetch has finished.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn logged_out() -> Self {
        Self::default()
    }

    /// State after a current-user lookup completed.
    pub fn resolved(result: Result<Option<User>, ApiError>) -> Self {
        match result {
            Ok(user) => Self { user, loading: false, error: None },
            Err(e) => Self { user: None, loading: false, error: Some(e.user_message()) },
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
