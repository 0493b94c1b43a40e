//! Root application component with routing, context providers, and the
//! navigation guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::config::AppConfig;
use crate::pages::{admin::AdminPage, login::LoginPage, main::MainPage, profile::ProfilePage};
use crate::state::session::SessionState;
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
/// Provides configuration and session state, starts the one-shot session
/// bootstrap, and sets up client-side routing behind the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    provide_context(config.clone());

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Resolve the stored token once per application load. Until this
    // settles the session stays `loading` and the guard holds off.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let state = SessionState::bootstrap(&config).await;
            session.set(state);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <Stylesheet id="leptos" href="/pkg/fitportal-web.css"/>
        <Title text="FitPortal"/>

        <Router>
            <NavigationGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("main") view=MainPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}

/// Installs the route guard effects; renders nothing.
#[component]
fn NavigationGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<AppConfig>();
    let location = use_location();
    let navigate = use_navigate();

    guard::install_navigation_guard(session, &location, navigate);
    guard::install_recheck(session, &location, config);
}
