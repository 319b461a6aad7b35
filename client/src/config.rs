//! Build-time client configuration.
//!
//! The browser bundle has no environment to read at runtime, so the backend
//! location is baked in at compile time. Set `AUTH_API_BASE_URL` when building
//! the WASM bundle to point at a different backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Local-storage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Base URL of the authentication backend, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("AUTH_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
