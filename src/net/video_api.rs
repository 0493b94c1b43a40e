//! Teaching-video library API wrappers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "video_api_test.rs"]
mod video_api_test;

use crate::config::AppConfig;

use super::types::TeachingVideo;
#[cfg(feature = "hydrate")]
use super::types::Envelope;

#[cfg(any(test, feature = "hydrate"))]
fn videos_endpoint(base: &str) -> String {
    format!("{base}/api/media/videos")
}

#[cfg(any(test, feature = "hydrate"))]
fn videos_failed_message(status: u16) -> String {
    format!("video listing failed: {status}")
}

/// Fetch the teaching-video library via `GET /api/media/videos`.
///
/// # Errors
///
/// Returns an error string on transport failure, non-success status, or a
/// malformed listing payload.
pub async fn fetch_all_videos(
    config: &AppConfig,
    token: &str,
) -> Result<Vec<TeachingVideo>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::send_with_timeout(
            gloo_net::http::Request::get(&videos_endpoint(&config.api_base_url))
                .header("Authorization", &super::bearer(token))
                .send(),
            config.timeout_ms,
        )
        .await?;
        if !resp.ok() {
            return Err(videos_failed_message(resp.status()));
        }
        let env: Envelope<Vec<TeachingVideo>> = resp.json().await.map_err(|e| e.to_string())?;
        env.into_data()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err("not available on server".to_owned())
    }
}
