use super::*;

use crate::state::session::Verification;

fn session(token: &str, verification: Verification) -> SessionState {
    SessionState::ready(token.to_owned(), verification)
}

// =============================================================
// Public routes
// =============================================================

#[test]
fn public_routes_proceed_regardless_of_token_state() {
    let login = routes::find("/login");
    for state in [
        session("", Verification::default()),
        session("abc", Verification::Valid),
        session("abc", Verification::Invalid("token rejected: 401".to_owned())),
    ] {
        assert_eq!(decide(login, &state), GuardDecision::Proceed);
    }
}

#[test]
fn unknown_paths_proceed_to_the_router_fallback() {
    let state = session("", Verification::default());
    assert_eq!(decide(None, &state), GuardDecision::Proceed);
}

// =============================================================
// Protected routes
// =============================================================

#[test]
fn empty_token_on_main_redirects_to_login() {
    let state = session("", Verification::default());
    assert_eq!(
        decide(routes::find("/main"), &state),
        GuardDecision::Redirect("/login")
    );
}

#[test]
fn verified_token_allows_main() {
    let state = session("abc", Verification::Valid);
    assert_eq!(decide(routes::find("/main"), &state), GuardDecision::Proceed);
}

#[test]
fn rejected_token_redirects_main_to_login() {
    let state = session("abc", Verification::Invalid("token rejected: 401".to_owned()));
    assert_eq!(
        decide(routes::find("/main"), &state),
        GuardDecision::Redirect("/login")
    );
}

#[test]
fn cached_result_drives_every_protected_route() {
    // The guard never consults the network: the same cached outcome
    // decides every protected route for the life of the session.
    let valid = session("abc", Verification::Valid);
    let invalid = session("abc", Verification::Invalid("token rejected: 500".to_owned()));
    for path in ["/main", "/profile", "/admin"] {
        assert_eq!(decide(routes::find(path), &valid), GuardDecision::Proceed);
        assert_eq!(
            decide(routes::find(path), &invalid),
            GuardDecision::Redirect("/login")
        );
    }
}

// =============================================================
// Continuation contract
// =============================================================

#[test]
fn run_guard_invokes_continuation_exactly_once_on_proceed() {
    let state = session("", Verification::default());
    let mut calls = 0;
    run_guard(routes::find("/login"), &state, |redirect| {
        calls += 1;
        assert!(redirect.is_none());
    });
    assert_eq!(calls, 1);
}

#[test]
fn run_guard_passes_redirect_target_to_continuation() {
    let state = session("", Verification::default());
    let mut seen = None;
    run_guard(routes::find("/main"), &state, |redirect| {
        seen = redirect;
    });
    assert_eq!(seen, Some("/login"));
}
