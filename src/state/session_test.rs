use super::*;

use std::future::Future;

// =============================================================
// Verification
// =============================================================

#[test]
fn verification_collapses_to_bool() {
    assert!(Verification::Valid.is_valid());
    assert!(!Verification::Invalid("token rejected: 401".to_owned()).is_valid());
}

#[test]
fn verification_default_is_invalid() {
    assert!(!Verification::default().is_valid());
}

#[test]
fn invalid_keeps_the_reason() {
    let v = Verification::Invalid("token rejected: 401".to_owned());
    match v {
        Verification::Invalid(reason) => assert_eq!(reason, "token rejected: 401"),
        Verification::Valid => panic!("expected invalid"),
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_session_is_loading_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.token.is_empty());
    assert!(!state.is_authenticated());
    assert_eq!(state.recheck, RecheckPolicy::Startup);
}

#[test]
fn ready_session_is_not_loading() {
    let state = SessionState::ready("abc".to_owned(), Verification::Valid);
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn verified_empty_token_is_still_unauthenticated() {
    // An empty token never counts as a session, whatever the cached outcome.
    let state = SessionState::ready(String::new(), Verification::Valid);
    assert!(!state.is_authenticated());
}

#[test]
fn adopt_token_marks_session_valid() {
    let mut state = SessionState::default();
    state.adopt_token("fresh".to_owned());
    assert!(!state.loading);
    assert_eq!(state.token, "fresh");
    assert!(state.is_authenticated());
}

#[test]
fn bootstrap_with_no_stored_token_skips_verification() {
    // Outside the browser the credential store is empty, so bootstrap
    // resolves without touching the network.
    let state = block_on(SessionState::bootstrap(&crate::config::AppConfig::default()));
    assert!(!state.loading);
    assert!(state.token.is_empty());
    assert!(!state.is_authenticated());
}

/// Minimal executor for the single ready-immediately future above.
fn block_on<F: Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    struct Noop;
    impl Wake for Noop {
        fn wake(self: Arc<Self>) {}
    }

    let waker = Waker::from(Arc::new(Noop));
    let mut cx = Context::from_waker(&waker);
    let mut fut = pin!(fut);
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
