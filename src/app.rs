//! Root application component with routing, context providers, and the
//! navigation guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::pages::{home::HomePage, login::LoginPage, shopping_list::ShoppingListPage};
use crate::state::{grocery::GroceryState, session::SessionState};
use crate::util::guard;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the stores once at bootstrap, provides them as context, and
/// sets up client-side routing behind the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Seed identity from the session cookie; the who-am-I probe corrects
    // it after the first guard pass.
    let session = RwSignal::new(SessionState::from_cookie(
        &crate::util::cookie::read_document_cookie(),
    ));
    let grocery = RwSignal::new(GroceryState::default());

    provide_context(session);
    provide_context(grocery);

    view! {
        <Stylesheet id="leptos" href="/pkg/cartful.css"/>
        <Title text="Cartful"/>

        <Router>
            <GuardedRoutes/>
        </Router>
    }
}

/// Static route table wrapped with the guard, which needs the router's
/// location context and therefore lives below `<Router>`.
#[component]
fn GuardedRoutes() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    guard::install_session_probe(session, location.pathname);
    guard::install_route_guard(session, location.pathname, use_navigate());

    view! {
        <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=HomePage/>
            <Route path=(StaticSegment("account"), StaticSegment("login")) view=LoginPage/>
            <Route path=StaticSegment("shopping-list") view=ShoppingListPage/>
        </Routes>
    }
}
