//! Home page: user summary when logged in, login/register form otherwise.

use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::components::user_card::UserCard;
use crate::state::auth::AuthState;

/// Home page. Resolves the current user from the stored token on mount.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::session::browser_session().current_user().await;
        auth.set(AuthState::resolved(result));
    });

    let on_logout = Callback::new(move |()| {
        crate::net::session::browser_session().logout();
        auth.set(AuthState::logged_out());
    });

    view! {
        <div class="home-page">
            <h1>"Room Booking"</h1>
            <Show when=move || auth.with(|a| a.error.is_some())>
                <p class="home-page__error">{move || auth.with(|a| a.error.clone().unwrap_or_default())}</p>
            </Show>
            {move || {
                let state = auth.get();
                if state.loading {
                    view! { <p class="home-page__status">"Loading..."</p> }.into_any()
                } else if let Some(user) = state.user {
                    view! { <UserCard user=user on_logout=on_logout/> }.into_any()
                } else {
                    view! { <LoginForm/> }.into_any()
                }
            }}
        </div>
    }
}
