//! Login page: email + password against the backend session endpoint.
//!
//! Submission marks the session store's login slot in flight, posts the
//! credentials (with the CSRF token when the page carries one), and on
//! success re-derives the identity from the cookie the backend just set,
//! refreshes the profile cache, and moves to the landing route. Failures
//! stay on this page with the error rendered next to the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Trim the email and require both fields.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let busy = move || session.with(|s| s.login.is_in_flight());
    let login_error = move || session.with(|s| s.login.error().map(ToString::to_string));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|s| s.login.is_in_flight()) {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get(), &password.get()) {
                Ok(pair) => pair,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        info.set(String::new());
        session.update(SessionState::login_started);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(()) => {
                        let identity = crate::util::cookie::session_user(
                            &crate::util::cookie::read_document_cookie(),
                            crate::config::SESSION_COOKIE,
                        );
                        session.update(|s| s.login_succeeded(identity));
                        match crate::net::api::fetch_user_profile().await {
                            Ok(profile) => session.update(|s| s.set_profile(profile)),
                            Err(err) => log::warn!("profile refresh failed: {err}"),
                        }
                        navigate(
                            crate::config::LANDING_ROUTE,
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Err(err) => session.update(|s| s.login_failed(err)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Cartful"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy()>
                        {move || if busy() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || login_error().is_some()>
                    <p class="login-message login-message--error">
                        {move || login_error().unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
