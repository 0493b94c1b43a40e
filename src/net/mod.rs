//! Network wrappers for the JSON REST backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, bounded by the
//! configured request timeout. Server-side (SSR) and native tests: stubs
//! returning `None`/error since the endpoints are only meaningful in the
//! browser.

pub mod admin_api;
pub mod auth_api;
pub mod train_api;
pub mod types;
pub mod video_api;

/// Format the `Authorization` header value for a bearer token.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Drive a `gloo-net` send future against the configured timeout.
///
/// A timeout surfaces as an error string like any other transport failure,
/// so callers keep a single failure path.
#[cfg(feature = "hydrate")]
pub(crate) async fn send_with_timeout<T, F>(fut: F, timeout_ms: u32) -> Result<T, String>
where
    F: std::future::Future<Output = Result<T, gloo_net::Error>>,
{
    use std::pin::pin;

    use futures::future::{Either, select};

    let fut = pin!(fut);
    let timeout = pin!(gloo_timers::future::TimeoutFuture::new(timeout_ms));
    match select(fut, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| e.to_string()),
        Either::Right(((), _)) => Err(format!("request timed out after {timeout_ms}ms")),
    }
}
