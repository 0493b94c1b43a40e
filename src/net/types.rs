//! Wire DTOs for the JSON REST backend.
//!
//! DESIGN
//! ======
//! Every endpoint answers the same `{code, message, data}` envelope with a
//! nullable `data`; `code == 200` is success. Field names follow the wire
//! format, so the one camelCase field (`actualCount`) is renamed rather
//! than reshaping the whole struct.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Standard response envelope wrapping every backend payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Whether the backend reported success.
    pub fn is_success(&self) -> bool {
        self.code == 200
    }

    /// Unwrap the payload, turning a backend failure into its message.
    pub fn into_data(self) -> Result<T, String> {
        if self.is_success() {
            self.data.ok_or_else(|| "missing response data".to_owned())
        } else {
            Err(self.message)
        }
    }
}

/// An authenticated user as returned by the profile endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Login request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginData {
    pub username: String,
    pub password: String,
}

/// Registration request body. The confirmation password is a page-level
/// concern and never crosses the wire.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterData {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Successful login payload: the issued token plus the user record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Payload of the token refresh endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RefreshData {
    pub token: String,
}

/// Editable subset of the profile page. Measurements travel as strings,
/// matching the form fields and the wire format.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SimpleProfileForm {
    pub username: String,
    pub height: String,
    pub weight: String,
}

/// User feedback submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeedbackData {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A feedback record as listed on the admin page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeedbackRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub content: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload of the admin feedback listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeedbackList {
    pub feedbacks: Vec<FeedbackRecord>,
}

/// One training-plan entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: String,
    pub project: String,
    pub target: i64,
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(
        rename = "actualCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub actual_count: Option<i64>,
}

/// Partial update for an existing plan; absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(rename = "actualCount", skip_serializing_if = "Option::is_none")]
    pub actual_count: Option<i64>,
}

/// Payload of the plan listing endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlanList {
    pub list: Vec<PlanItem>,
    pub total: usize,
}

/// Payload of the trained-dates endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrainedDates {
    pub date: Vec<String>,
}

/// A teaching video as listed in the media library.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TeachingVideo {
    pub id: i64,
    pub title: String,
    pub thumbnail: String,
    pub url: String,
    pub duration: String,
}
