//! Navigation guard gating every route transition.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision core is pure: given the target route's descriptor and the
//! current [`SessionState`] it either proceeds or redirects to `/login`.
//! [`install_navigation_guard`] wires that core into the router as an
//! effect over the current pathname, and [`install_recheck`] implements the
//! optional per-navigation re-verification policy.
//!
//! Fail-closed: a missing, unverified, or rejected token on an
//! authenticated route always resolves to a redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::location::Location;

use crate::config::AppConfig;
use crate::routes::{self, LOGIN_PATH, RouteDescriptor};
use crate::state::session::SessionState;

/// Outcome of a guard decision for one route transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Enter the target route.
    Proceed,
    /// Navigate to this path instead.
    Redirect(&'static str),
}

/// Decide whether a transition into `route` may proceed.
///
/// Routes without a descriptor (unknown paths) proceed so the router's
/// fallback can render. Public routes proceed regardless of token state;
/// an empty token or a failed verification on a protected route redirects
/// to the login page.
pub fn decide(route: Option<&RouteDescriptor>, session: &SessionState) -> GuardDecision {
    let Some(route) = route else {
        return GuardDecision::Proceed;
    };
    if !route.requires_auth {
        return GuardDecision::Proceed;
    }
    if session.token.is_empty() {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    if session.verification.is_valid() {
        GuardDecision::Proceed
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Continuation form of [`decide`]: invokes `next` exactly once, with
/// `None` to proceed or `Some(target)` to redirect.
pub fn run_guard<F>(route: Option<&RouteDescriptor>, session: &SessionState, next: F)
where
    F: FnOnce(Option<&'static str>),
{
    match decide(route, session) {
        GuardDecision::Proceed => next(None),
        GuardDecision::Redirect(target) => next(Some(target)),
    }
}

/// Install the guard as an effect over the router location.
///
/// Re-runs on every pathname change and whenever the session state
/// resolves; defers while the session bootstrap is still loading so the
/// first decision observes a settled verification result.
pub fn install_navigation_guard<F>(
    session: RwSignal<SessionState>,
    location: &Location,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let pathname = location.pathname;
    Effect::new(move || {
        let path = pathname.get();
        let state = session.get();
        if state.loading {
            return;
        }
        run_guard(routes::find(&path), &state, |redirect| {
            if let Some(target) = redirect {
                if path != target {
                    navigate(target, NavigateOptions::default());
                }
            }
        });
    });
}

/// Install the background re-verification effect for
/// [`RecheckPolicy`](crate::state::session::RecheckPolicy)`::EveryNavigation`.
///
/// Tracks only the pathname (the session is read untracked) so updating
/// the verification result cannot re-trigger another round-trip.
pub fn install_recheck(session: RwSignal<SessionState>, location: &Location, config: AppConfig) {
    let pathname = location.pathname;
    #[cfg(feature = "hydrate")]
    Effect::new(move |_: Option<()>| {
        let path = pathname.get();
        let state = session.get_untracked();
        if state.loading
            || state.recheck != crate::state::session::RecheckPolicy::EveryNavigation
            || state.token.is_empty()
            || !routes::find(&path).is_some_and(|r| r.requires_auth)
        {
            return;
        }
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let verification = crate::net::auth_api::check_token(&config, &state.token).await;
            session.update(|s| s.verification = verification);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, pathname, config);
    }
}
