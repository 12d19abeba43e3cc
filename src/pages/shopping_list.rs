//! Shopping-list page, the protected feature route.
//!
//! Loads the list once per entry and applies add/toggle/delete outcomes
//! to the shared grocery state from each request's completion handler.

#[cfg(test)]
#[path = "shopping_list_test.rs"]
mod shopping_list_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::grocery::GroceryState;
use crate::state::session::SessionState;

/// Trim the new-item input; `None` when blank.
fn validate_item_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_owned())
    }
}

#[component]
pub fn ShoppingListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let grocery = expect_context::<RwSignal<GroceryState>>();
    let new_name = RwSignal::new(String::new());

    // Fetch once per page entry, and only while signed in; the guard is
    // already redirecting otherwise.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !session.with(SessionState::is_logged_in) {
            return;
        }
        requested.set(true);
        grocery.update(|g| g.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_grocery_items().await {
                Ok(items) => grocery.update(|g| g.loaded(items)),
                Err(err) => grocery.update(|g| g.fail(err)),
            }
        });
    });

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(name) = validate_item_name(&new_name.get()) else {
            return;
        };
        new_name.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_grocery_item(&name).await {
                Ok(item) => grocery.update(|g| g.upsert(item)),
                Err(err) => grocery.update(|g| g.fail(err)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    };

    let on_toggle = move |name: String, completed: bool| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_grocery_item(&name, completed).await {
                Ok(()) => grocery.update(|g| g.set_completed(&name, completed)),
                Err(err) => grocery.update(|g| g.fail(err)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, completed);
        }
    };

    let on_delete = move |name: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_grocery_item(&name).await {
                Ok(()) => grocery.update(|g| g.remove(&name)),
                Err(err) => grocery.update(|g| g.fail(err)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    };

    view! {
        <Show
            when=move || session.with(SessionState::is_logged_in)
            fallback=move || {
                view! {
                    <div class="list-page">
                        <p>"Redirecting to sign-in..."</p>
                    </div>
                }
            }
        >
            <div class="list-page">
                <Navbar/>
                <main class="list-page__content">
                    <h1>"Shopping List"</h1>
                    <form class="list-page__add" on:submit=on_add>
                        <input
                            class="list-page__input"
                            type="text"
                            placeholder="Add an item..."
                            prop:value=move || new_name.get()
                            on:input=move |ev| new_name.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit">
                            "Add"
                        </button>
                    </form>
                    <Show when=move || grocery.get().error.is_some()>
                        <p class="list-page__error">
                            {move || grocery.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                    <Show
                        when=move || !grocery.get().loading
                        fallback=move || view! { <p>"Loading items..."</p> }
                    >
                        <ul class="list-page__items">
                            {move || {
                                grocery
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|item| {
                                        let label = item.name.clone();
                                        let toggle_name = item.name.clone();
                                        let delete_name = item.name;
                                        let completed = item.completed;
                                        view! {
                                            <li class={if completed {
                                                "list-item list-item--done"
                                            } else {
                                                "list-item"
                                            }}>
                                                <label class="list-item__label">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=completed
                                                        on:change=move |_| {
                                                            on_toggle(toggle_name.clone(), !completed);
                                                        }
                                                    />
                                                    <span>{label}</span>
                                                </label>
                                                <button
                                                    class="btn list-item__delete"
                                                    on:click=move |_| on_delete(delete_name.clone())
                                                >
                                                    "Remove"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </main>
            </div>
        </Show>
    }
}
