//! Landing page for signed-in users, also the post-logout home.
//!
//! Content stays behind the logged-in check so an unauthenticated
//! visitor only ever sees the redirect placeholder while the guard sends
//! them to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::config;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let greeting = move || {
        session.with(|s| {
            s.profile
                .as_ref()
                .and_then(|p| p.full_name.clone())
                .or_else(|| s.user.clone())
                .unwrap_or_default()
        })
    };

    let open_list = move || {
        let navigate = navigate.clone();
        move |_| navigate(config::SHOPPING_LIST_ROUTE, NavigateOptions::default())
    };

    view! {
        <Show
            when=move || session.with(SessionState::is_logged_in)
            fallback=move || {
                view! {
                    <div class="home-page">
                        <p>"Redirecting to sign-in..."</p>
                    </div>
                }
            }
        >
            <div class="home-page">
                <Navbar/>
                <main class="home-page__content">
                    <h1>{move || format!("Welcome back, {}", greeting())}</h1>
                    <p>"Plan your next shop from your saved list."</p>
                    <button class="btn btn--primary" on:click=open_list()>
                        "Open shopping list"
                    </button>
                </main>
            </div>
        </Show>
    }
}
