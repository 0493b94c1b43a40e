//! Credential store backed by browser `localStorage`.
//!
//! A single string token lives under a fixed key. An absent entry reads as
//! the empty string, which the rest of the crate treats as "unauthenticated".
//! Requires a browser environment; outside `hydrate` reads are empty and
//! writes are no-ops.

/// localStorage key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// Read the stored session token, or the empty string if none is stored.
pub fn read_token() -> String {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(token)) = storage.get_item(TOKEN_KEY) {
                return token;
            }
        }
        String::new()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Persist a session token, replacing any previous value.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
