//! Bearer-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only client-side artifact that outlives a page load.
//! Pages and the session never touch `localStorage` directly; they go through
//! [`TokenStore`] so tests can substitute [`MemoryTokenStore`].
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is best-effort: a missing or blocked `localStorage` reads
//! as "no token" and writes are dropped with a warning, same as SSR.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;

/// Get/set access to the persisted bearer token.
///
/// An empty string means "not authenticated"; implementations never return
/// an error for a missing value.
pub trait TokenStore {
    /// Persisted token, or `""` if none was ever set.
    fn get(&self) -> String;

    /// Persist `token`. Passing `""` clears effective auth.
    fn set(&self, token: &str);

    fn clear(&self) {
        self.set("");
    }
}

/// In-process token store. Used by tests and anywhere no browser exists.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> String {
        self.token.borrow().clone().unwrap_or_default()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }
}

/// `window.localStorage` backed store under [`TOKEN_STORAGE_KEY`](crate::config::TOKEN_STORAGE_KEY).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            local_storage()
                .and_then(|storage| storage.get_item(crate::config::TOKEN_STORAGE_KEY).ok().flatten())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; token not persisted");
                return;
            };
            if storage.set_item(crate::config::TOKEN_STORAGE_KEY, token).is_err() {
                log::warn!("localStorage rejected token write");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }
}
