//! Training-plan API wrappers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "train_api_test.rs"]
mod train_api_test;

use crate::config::AppConfig;

use super::types::{Envelope, PlanItem, PlanList, PlanUpdate};
#[cfg(feature = "hydrate")]
use super::types::TrainedDates;

#[cfg(any(test, feature = "hydrate"))]
fn plan_endpoint(base: &str) -> String {
    format!("{base}/api/training-plan")
}

#[cfg(any(test, feature = "hydrate"))]
fn plan_list_endpoint(base: &str) -> String {
    format!("{base}/api/training-plan/list")
}

#[cfg(any(test, feature = "hydrate"))]
fn plan_item_endpoint(base: &str, id: i64) -> String {
    format!("{base}/api/training-plan/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn trained_dates_endpoint(base: &str, year: Option<&str>, month: Option<&str>) -> String {
    let mut url = format!("{base}/api/training-plan/trained-dates");
    let mut sep = '?';
    if let Some(year) = year {
        url.push(sep);
        url.push_str("year=");
        url.push_str(year);
        sep = '&';
    }
    if let Some(month) = month {
        url.push(sep);
        url.push_str("month=");
        url.push_str(month);
    }
    url
}

#[cfg(any(test, feature = "hydrate"))]
fn plan_request_failed_message(status: u16) -> String {
    format!("plan request failed: {status}")
}

/// Submit a new plan entry via `POST /api/training-plan`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn submit_plan(
    config: &AppConfig,
    token: &str,
    plan: &PlanItem,
) -> Result<Envelope<PlanItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&plan_endpoint(&config.api_base_url))
            .header("Authorization", &super::bearer(token))
            .json(plan)
            .map_err(|e| e.to_string())?;
        let resp = super::send_with_timeout(req.send(), config.timeout_ms).await?;
        if !resp.ok() {
            return Err(plan_request_failed_message(resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, plan);
        Err("not available on server".to_owned())
    }
}

/// Fetch the user's plan entries via `GET /api/training-plan/list`.
///
/// # Errors
///
/// Returns an error string on transport failure, non-success status, or a
/// malformed listing payload.
pub async fn fetch_plans(config: &AppConfig, token: &str) -> Result<PlanList, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::send_with_timeout(
            gloo_net::http::Request::get(&plan_list_endpoint(&config.api_base_url))
                .header("Authorization", &super::bearer(token))
                .send(),
            config.timeout_ms,
        )
        .await?;
        if !resp.ok() {
            return Err(plan_request_failed_message(resp.status()));
        }
        let env: Envelope<PlanList> = resp.json().await.map_err(|e| e.to_string())?;
        env.into_data()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err("not available on server".to_owned())
    }
}

/// Apply a partial update to an existing plan entry via
/// `PUT /api/training-plan/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn update_plan(
    config: &AppConfig,
    token: &str,
    id: i64,
    update: &PlanUpdate,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::put(&plan_item_endpoint(&config.api_base_url, id))
            .header("Authorization", &super::bearer(token))
            .json(update)
            .map_err(|e| e.to_string())?;
        let resp = super::send_with_timeout(req.send(), config.timeout_ms).await?;
        if !resp.ok() {
            return Err(plan_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, id, update);
        Err("not available on server".to_owned())
    }
}

/// Delete a plan entry via `DELETE /api/training-plan/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-success status.
pub async fn delete_plan(config: &AppConfig, token: &str, id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::send_with_timeout(
            gloo_net::http::Request::delete(&plan_item_endpoint(&config.api_base_url, id))
                .header("Authorization", &super::bearer(token))
                .send(),
            config.timeout_ms,
        )
        .await?;
        if !resp.ok() {
            return Err(plan_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the dates with completed training via
/// `GET /api/training-plan/trained-dates`, optionally scoped to a
/// year/month.
///
/// # Errors
///
/// Returns an error string on transport failure, non-success status, or a
/// malformed payload.
pub async fn fetch_trained_dates(
    config: &AppConfig,
    token: &str,
    year: Option<&str>,
    month: Option<&str>,
) -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = trained_dates_endpoint(&config.api_base_url, year, month);
        let resp = super::send_with_timeout(
            gloo_net::http::Request::get(&url)
                .header("Authorization", &super::bearer(token))
                .send(),
            config.timeout_ms,
        )
        .await?;
        if !resp.ok() {
            return Err(plan_request_failed_message(resp.status()));
        }
        let env: Envelope<TrainedDates> = resp.json().await.map_err(|e| e.to_string())?;
        env.into_data().map(|d| d.date)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, year, month);
        Err("not available on server".to_owned())
    }
}
