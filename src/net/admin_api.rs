//! Admin-only API wrappers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "admin_api_test.rs"]
mod admin_api_test;

use crate::config::AppConfig;

use super::types::FeedbackRecord;
#[cfg(feature = "hydrate")]
use super::types::{Envelope, FeedbackList};

#[cfg(any(test, feature = "hydrate"))]
fn feedback_all_endpoint(base: &str) -> String {
    format!("{base}/api/feedback_all")
}

#[cfg(any(test, feature = "hydrate"))]
fn feedback_all_failed_message(status: u16) -> String {
    format!("feedback listing failed: {status}")
}

/// Fetch every submitted feedback record via `GET /api/feedback_all`.
/// The backend rejects non-admin tokens with 401.
///
/// # Errors
///
/// Returns an error string on transport failure, non-success status, or a
/// malformed listing payload.
pub async fn fetch_all_feedback(
    config: &AppConfig,
    token: &str,
) -> Result<Vec<FeedbackRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::send_with_timeout(
            gloo_net::http::Request::get(&feedback_all_endpoint(&config.api_base_url))
                .header("Authorization", &super::bearer(token))
                .send(),
            config.timeout_ms,
        )
        .await?;
        if !resp.ok() {
            return Err(feedback_all_failed_message(resp.status()));
        }
        let env: Envelope<FeedbackList> = resp.json().await.map_err(|e| e.to_string())?;
        env.into_data().map(|d| d.feedbacks)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err("not available on server".to_owned())
    }
}
