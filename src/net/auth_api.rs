//! Authentication and profile API wrappers.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. The token
//! verifier is the one fail-closed spot: every transport error, timeout,
//! or non-2xx status collapses to `Verification::Invalid` with the reason
//! preserved for diagnostics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

use crate::config::AppConfig;
use crate::state::session::Verification;

use super::types::{AuthSession, Envelope, FeedbackData, LoginData, RegisterData, SimpleProfileForm, User};
#[cfg(feature = "hydrate")]
use super::types::RefreshData;

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base: &str) -> String {
    format!("{base}/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint(base: &str) -> String {
    format!("{base}/auth/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint(base: &str) -> String {
    format!("{base}/auth/profile")
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_endpoint(base: &str) -> String {
    format!("{base}/auth/refresh")
}

#[cfg(any(test, feature = "hydrate"))]
fn update_profile_endpoint(base: &str) -> String {
    format!("{base}/auth/update_simple_profile")
}

#[cfg(any(test, feature = "hydrate"))]
fn change_password_endpoint(base: &str) -> String {
    format!("{base}/auth/change_password")
}

#[cfg(any(test, feature = "hydrate"))]
fn feedback_endpoint(base: &str) -> String {
    format!("{base}/api/feedback")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    format!("register request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn token_rejected_message(status: u16) -> String {
    format!("token rejected: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_failed_message(status: u16) -> String {
    format!("token refresh failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn update_profile_failed_message(status: u16) -> String {
    format!("profile update failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn change_password_failed_message(status: u16) -> String {
    format!("password change failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn feedback_failed_message(status: u16) -> String {
    format!("feedback submit failed: {status}")
}

/// Log in with username and password via `POST /auth/login`.
///
/// The backend answers the envelope on 200 as well as on the expected
/// rejection statuses (400/401) so the page can surface `message`; any
/// other status is an error.
///
/// # Errors
///
/// Returns an error string on transport failure or unexpected status.
pub async fn login(config: &AppConfig, data: &LoginData) -> Result<Envelope<AuthSession>, String> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&login_endpoint(&config.api_base_url))
            .json(data)
            .map_err(|e| e.to_string())?;
        let resp = super::send_with_timeout(req.send(), config.timeout_ms).await?;
        match resp.status() {
            200 | 400 | 401 => resp.json().await.map_err(|e| e.to_string()),
            status => Err(login_failed_message(status)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, data);
        Err("not available on server".to_owned())
    }
}

/// Register a new account via `POST /auth/register`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn register(
    config: &AppConfig,
    data: &RegisterData,
) -> Result<Envelope<AuthSession>, String> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&register_endpoint(&config.api_base_url))
            .json(data)
            .map_err(|e| e.to_string())?;
        let resp = super::send_with_timeout(req.send(), config.timeout_ms).await?;
        if !resp.ok() {
            return Err(register_failed_message(resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, data);
        Err("not available on server".to_owned())
    }
}

/// Ask the backend whether `token` is currently valid by hitting the
/// profile endpoint with it. Never fails past this boundary.
pub async fn check_token(config: &AppConfig, token: &str) -> Verification {
    #[cfg(feature = "hydrate")]
    {
        let result = super::send_with_timeout(
            gloo_net::http::Request::get(&profile_endpoint(&config.api_base_url))
                .header("Authorization", &super::bearer(token))
                .send(),
            config.timeout_ms,
        )
        .await;
        match result {
            Ok(resp) if resp.ok() => Verification::Valid,
            Ok(resp) => {
                let reason = token_rejected_message(resp.status());
                log::warn!("{reason}");
                Verification::Invalid(reason)
            }
            Err(reason) => {
                log::warn!("token verification failed: {reason}");
                Verification::Invalid(reason)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Verification::Invalid("not available on server".to_owned())
    }
}

/// Boolean form of [`check_token`].
pub async fn verify_token(config: &AppConfig, token: &str) -> bool {
    check_token(config, token).await.is_valid()
}

/// Fetch the authenticated user's record from `GET /auth/profile`.
/// Returns `None` if the token is rejected or on the server.
pub async fn fetch_profile(config: &AppConfig, token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::send_with_timeout(
            gloo_net::http::Request::get(&profile_endpoint(&config.api_base_url))
                .header("Authorization", &super::bearer(token))
                .send(),
            config.timeout_ms,
        )
        .await
        .ok()?;
        if !resp.ok() {
            return None;
        }
        let env: Envelope<User> = resp.json().await.ok()?;
        env.into_data().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        None
    }
}

/// Exchange the current token for a fresh one via `GET /auth/refresh`.
///
/// # Errors
///
/// Returns an error string on transport failure, non-success status, or a
/// success envelope without a token.
pub async fn refresh_token(config: &AppConfig, token: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::send_with_timeout(
            gloo_net::http::Request::get(&refresh_endpoint(&config.api_base_url))
                .header("Authorization", &super::bearer(token))
                .send(),
            config.timeout_ms,
        )
        .await?;
        if !resp.ok() {
            return Err(refresh_failed_message(resp.status()));
        }
        let env: Envelope<RefreshData> = resp.json().await.map_err(|e| e.to_string())?;
        env.into_data().map(|d| d.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err("not available on server".to_owned())
    }
}

/// Update username/height/weight via `PUT /auth/update_simple_profile`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn update_simple_profile(
    config: &AppConfig,
    token: &str,
    form: &SimpleProfileForm,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::put(&update_profile_endpoint(&config.api_base_url))
            .header("Authorization", &super::bearer(token))
            .json(form)
            .map_err(|e| e.to_string())?;
        let resp = super::send_with_timeout(req.send(), config.timeout_ms).await?;
        if !resp.ok() {
            return Err(update_profile_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, form);
        Err("not available on server".to_owned())
    }
}

/// Change the account password via `PUT /auth/change_password`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn change_password(
    config: &AppConfig,
    token: &str,
    new_password: &str,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "password": new_password });
        let req = gloo_net::http::Request::put(&change_password_endpoint(&config.api_base_url))
            .header("Authorization", &super::bearer(token))
            .json(&body)
            .map_err(|e| e.to_string())?;
        let resp = super::send_with_timeout(req.send(), config.timeout_ms).await?;
        if !resp.ok() {
            return Err(change_password_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, new_password);
        Err("not available on server".to_owned())
    }
}

/// Submit user feedback via `POST /api/feedback`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn send_feedback(
    config: &AppConfig,
    token: &str,
    feedback: &FeedbackData,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&feedback_endpoint(&config.api_base_url))
            .header("Authorization", &super::bearer(token))
            .json(feedback)
            .map_err(|e| e.to_string())?;
        let resp = super::send_with_timeout(req.send(), config.timeout_ms).await?;
        if !resp.ok() {
            return Err(feedback_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, feedback);
        Err("not available on server".to_owned())
    }
}
