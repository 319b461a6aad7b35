//! Networking modules for the authentication backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and interprets the REST calls, `transport` is the seam to the
//! browser's `fetch`, `session` ties calls to the token store, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod session;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
