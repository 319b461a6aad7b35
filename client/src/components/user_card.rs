//! Read-only summary of the logged-in user with a logout action.

use leptos::prelude::*;

use crate::net::types::User;

/// Renders the user's profile fields. The password the backend echoes is
/// never part of [`User`], so it cannot be shown here.
#[component]
pub fn UserCard(user: User, on_logout: Callback<()>) -> impl IntoView {
    let display_name = user.display_name();
    let id = user.id.map_or_else(|| "—".to_owned(), |id| id.to_string());
    let role = if user.admin() { "Administrator" } else { "Member" };
    let created_at = user.created_at.clone().unwrap_or_else(|| "—".to_owned());

    view! {
        <div class="user-card">
            <h2>"Welcome, " {display_name}</h2>
            <div class="user-card__row">
                <span class="user-card__label">"Email"</span>
                <span class="user-card__value">{user.email}</span>
            </div>
            <div class="user-card__row">
                <span class="user-card__label">"User ID"</span>
                <span class="user-card__value">{id}</span>
            </div>
            <div class="user-card__row">
                <span class="user-card__label">"Role"</span>
                <span class="user-card__value">{role}</span>
            </div>
            <div class="user-card__row">
                <span class="user-card__label">"Member since"</span>
                <span class="user-card__value">{created_at}</span>
            </div>
            <button class="login-button" type="button" on:click=move |_| on_logout.run(())>
                "Log out"
            </button>
        </div>
    }
}
