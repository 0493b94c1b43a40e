//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard and user-aware pages read this state from context.
//! It is built once at application load by [`SessionState::bootstrap`] and
//! only refreshed afterwards when the re-check policy asks for it. With
//! the default policy a token invalidated server-side mid-session is not
//! noticed until the next page load.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::AppConfig;
use crate::net::auth_api;
use crate::util::storage;

/// Outcome of the one token verification round-trip.
///
/// Kept as a sum type so a rejection reason survives for diagnostics even
/// though callers only ever branch on [`Verification::is_valid`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verification {
    Valid,
    Invalid(String),
}

impl Verification {
    /// Collapse to the boolean the guard acts on.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl Default for Verification {
    fn default() -> Self {
        Self::Invalid("unverified".to_owned())
    }
}

/// When the stored token is re-verified against the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecheckPolicy {
    /// Verify once at application load; the result is cached for the life
    /// of the page load.
    #[default]
    Startup,
    /// Additionally re-verify in the background on every navigation into
    /// an authenticated route.
    EveryNavigation,
}

/// Authentication state for the loaded session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// Bearer token from the credential store; empty means unauthenticated.
    pub token: String,
    /// Cached verification outcome for `token`.
    pub verification: Verification,
    /// Re-check cadence for `verification`.
    pub recheck: RecheckPolicy,
    /// True until [`SessionState::bootstrap`] has resolved; the guard
    /// defers while loading.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: String::new(),
            verification: Verification::default(),
            recheck: RecheckPolicy::default(),
            loading: true,
        }
    }
}

impl SessionState {
    /// A resolved state with the given token and verification outcome.
    pub fn ready(token: String, verification: Verification) -> Self {
        Self {
            token,
            verification,
            recheck: RecheckPolicy::default(),
            loading: false,
        }
    }

    /// Whether the session holds a token that verified successfully.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty() && self.verification.is_valid()
    }

    /// Build the session at application load: read the stored token and
    /// verify it against the backend. An empty token skips the network
    /// round-trip entirely.
    pub async fn bootstrap(config: &AppConfig) -> Self {
        let token = storage::read_token();
        let verification = if token.is_empty() {
            Verification::Invalid("no stored token".to_owned())
        } else {
            auth_api::check_token(config, &token).await
        };
        Self::ready(token, verification)
    }

    /// Adopt a freshly issued token (login or refresh) as verified and
    /// persist it to the credential store.
    pub fn adopt_token(&mut self, token: String) {
        storage::write_token(&token);
        self.token = token;
        self.verification = Verification::Valid;
        self.loading = false;
    }
}
