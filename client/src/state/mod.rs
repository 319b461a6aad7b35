//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the app-wide login state shared through context; `form` is the
//! transient login/register record owned by the form component.

pub mod auth;
pub mod form;
