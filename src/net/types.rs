//! Wire DTOs for the portal REST backend.
//!
//! DESIGN
//! ======
//! Backend payloads are decoded into explicit structs at the boundary so a
//! missing or mistyped field becomes a decode error instead of a blank value
//! further down the UI.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated portal user as returned by `/login` and `/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Display name. The backend calls this `username`.
    #[serde(alias = "username")]
    pub name: String,
    /// Login email.
    pub email: String,
}

/// A purchasable, time-boxed connectivity plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    /// Length of access granted by the plan, in minutes.
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub duration_minutes: u32,
    pub price: f64,
}

/// A user's purchase of a plan.
///
/// The backend has served several shapes over time: the plan may be embedded
/// or referenced by id with a flattened `plan_name`, and the purchase/expiry
/// times appear under more than one key. All of them are optional here and
/// resolved through [`Subscription::purchased_at`] and
/// [`Subscription::expires_at`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub user_id: i64,
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default)]
    pub plan: Option<Plan>,
    #[serde(default)]
    pub plan_name: Option<String>,
    /// Backend-defined status string (`active`, `almost over`, `cancelled`, ...).
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub time_bought: Option<String>,
    #[serde(default)]
    pub ends_at: Option<String>,
    #[serde(default)]
    pub time_ends: Option<String>,
}

impl Subscription {
    /// Purchase time, preferring `created_at` over the older keys.
    #[must_use]
    pub fn purchased_at(&self) -> Option<&str> {
        self.created_at
            .as_deref()
            .or(self.timestamp.as_deref())
            .or(self.time_bought.as_deref())
    }

    /// Expiry time, preferring `ends_at` over `time_ends`.
    #[must_use]
    pub fn expires_at(&self) -> Option<&str> {
        self.ends_at.as_deref().or(self.time_ends.as_deref())
    }

    /// Plan name from the embedded plan, then the flattened field.
    #[must_use]
    pub fn plan_display_name(&self) -> Option<&str> {
        self.plan
            .as_ref()
            .map(|plan| plan.name.as_str())
            .or(self.plan_name.as_deref())
    }
}

/// One headline number from `GET /dashboard`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStat {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub title: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub value: i64,
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /register`.
///
/// `name` and `username` carry the same value; backend revisions disagree on
/// which key they read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /subscriptions`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CreateSubscriptionRequest {
    pub user_id: i64,
    pub plan_id: i64,
}

/// Registration success is either the bare user or `{ "user": {...} }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum UserPayload {
    Wrapped { user: User },
    Bare(User),
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        match payload {
            UserPayload::Wrapped { user } | UserPayload::Bare(user) => user,
        }
    }
}

/// Error body shape shared by every failing endpoint.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Human-readable text, preferring `message` over `error`.
    pub(crate) fn into_text(self) -> Option<String> {
        self.message
            .or(self.error)
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty())
    }
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    u32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u32")))
}

/// Accepts integers, integral floats, and numeric strings.
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected numeric string, got {text:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
