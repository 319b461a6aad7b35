//! Login/register form shown on the home page while logged out.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::form::{AuthForm, FormMode};

/// Combined login/register form.
///
/// On success the returned user is written straight into the `AuthState`
/// context, which swaps the home page over to the logged-in view.
#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(AuthForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let snapshot = form.get();
        if let Err(e) = snapshot.validate() {
            info.set(e.user_message());
            return;
        }
        busy.set(true);
        info.set(snapshot.mode.pending_message().to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = crate::net::session::browser_session();
            match snapshot.submit(&session).await {
                Ok(user) => {
                    info.set(String::new());
                    auth.set(AuthState::resolved(Ok(Some(user))));
                }
                Err(e) => info.set(e.user_message()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
    };

    let on_toggle = move |_| {
        form.update(|f| f.mode = f.mode.toggled());
        info.set(String::new());
    };

    let is_register = move || form.with(|f| f.mode == FormMode::Register);

    view! {
        <div class="login-card">
            <h2>{move || form.with(|f| f.mode.title())}</h2>
            <form class="login-form" on:submit=on_submit>
                <Show when=is_register>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || form.with(|f| f.first_name.clone())
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || form.with(|f| f.last_name.clone())
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                </Show>
                <input
                    class="login-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    {move || form.with(|f| f.mode.title())}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
            <button
                class="login-toggle"
                type="button"
                disabled=move || busy.get()
                on:click=on_toggle
            >
                {move || form.with(|f| f.mode.toggle_label())}
            </button>
        </div>
    }
}
