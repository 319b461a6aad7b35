//! Authenticated session: API calls bound to the persisted token.
//!
//! DESIGN
//! ======
//! Successful login/register stores the token and immediately fetches the
//! current user, so callers can publish the new auth state directly instead
//! of reloading the page to re-derive it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::{BrowserTransport, HttpTransport};
use super::types::{LoginRequest, RegisterRequest, User};
use crate::util::token_store::{LocalStorageTokenStore, TokenStore};

pub struct Session<S, T> {
    store: S,
    api: ApiClient<T>,
}

/// Session wired to `localStorage` and `fetch`.
pub type BrowserSession = Session<LocalStorageTokenStore, BrowserTransport>;

/// Build the session used by the hydrated app.
pub fn browser_session() -> BrowserSession {
    Session::new(
        LocalStorageTokenStore,
        ApiClient::new(crate::config::api_base_url(), BrowserTransport),
    )
}

impl<S: TokenStore, T: HttpTransport> Session<S, T> {
    pub fn new(store: S, api: ApiClient<T>) -> Self {
        Self { store, api }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// User for the stored token. No token means no request and no user.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiClient::fetch_current_user`] failures.
    pub async fn current_user(&self) -> Result<Option<User>, ApiError> {
        let token = self.store.get();
        if token.is_empty() {
            return Ok(None);
        }
        self.api.fetch_current_user(&token).await
    }

    /// Log in, persist the token, and return the resulting user.
    ///
    /// Any previous token is cleared first, so a failed login leaves the
    /// session logged out.
    ///
    /// # Errors
    ///
    /// Login or follow-up user fetch failures. The token is not kept unless
    /// the user lookup succeeds.
    pub async fn login(&self, body: &LoginRequest) -> Result<User, ApiError> {
        self.store.clear();
        let token = self.api.login(body).await?;
        self.adopt_token(&token).await
    }

    /// Register, persist the token, and return the resulting user.
    ///
    /// # Errors
    ///
    /// Same as [`Session::login`].
    pub async fn register(&self, body: &RegisterRequest) -> Result<User, ApiError> {
        self.store.clear();
        let token = self.api.register(body).await?;
        self.adopt_token(&token).await
    }

    /// Store `token` and resolve its user. The store and the returned state
    /// always agree: on any failure the token is cleared again.
    async fn adopt_token(&self, token: &str) -> Result<User, ApiError> {
        self.store.set(token);
        match self.current_user().await {
            Ok(Some(user)) => {
                log::info!("authenticated");
                Ok(user)
            }
            Ok(None) => {
                self.store.clear();
                log::warn!("token accepted but no user returned");
                Err(ApiError::NoUser)
            }
            Err(e) => {
                self.store.clear();
                Err(e)
            }
        }
    }

    pub fn logout(&self) {
        self.store.clear();
        log::info!("logged out");
    }
}
