//! Reusable UI components.
//!
//! DESIGN
//! ======
//! Components read shared state from context and keep their own transient
//! input state; pages decide which of them to show.

pub mod login_form;
pub mod user_card;
