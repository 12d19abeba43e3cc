//! Top bar with identity display and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on authenticated pages only. Sign-out tears the stores down
//! explicitly and returns to the home route; no page reload is involved.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::config;
use crate::state::grocery::GroceryState;
use crate::state::session::SessionState;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let grocery = expect_context::<RwSignal<GroceryState>>();
    let navigate = use_navigate();

    let self_identity = move || {
        session.with(|s| {
            s.profile
                .as_ref()
                .and_then(|p| p.full_name.clone())
                .or_else(|| s.user.clone())
                .unwrap_or_default()
        })
    };

    let logging_out = move || session.with(|s| s.logout.is_in_flight());
    let logout_error = move || session.with(|s| s.logout.error().map(ToString::to_string));

    let on_logout = move |_| {
        if session.with_untracked(|s| s.logout.is_in_flight()) {
            return;
        }
        session.update(SessionState::logout_started);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::logout().await {
                    Ok(()) => {
                        session.update(SessionState::logout_succeeded);
                        grocery.update(GroceryState::reset);
                        navigate(
                            config::LANDING_ROUTE,
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Err(err) => session.update(|s| s.logout_failed(err)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, grocery);
        }
    };

    view! {
        <header class="navbar toolbar">
            <span class="toolbar__brand">"Cartful"</span>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">{move || self_identity()}</span>
            <button
                class="btn toolbar__logout"
                on:click=on_logout
                disabled=move || logging_out()
                title="Sign out"
            >
                {move || if logging_out() { "Signing out..." } else { "Sign out" }}
            </button>
            <Show when=move || logout_error().is_some()>
                <span class="toolbar__error">{move || logout_error().unwrap_or_default()}</span>
            </Show>
        </header>
    }
}
