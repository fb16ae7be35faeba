//! REST client for the portal backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with [`ApiError::Unavailable`] so the pure
//! core still compiles and tests off-browser.
//!
//! DESIGN
//! ======
//! Pages talk to the backend through the [`PortalApi`] trait, held in context
//! as a [`SharedApi`]. Tests substitute an in-memory fake. Each call is
//! fire-once: no retries and no timeout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    CreateSubscriptionRequest, DashboardStat, LoginRequest, Plan, RegisterRequest, Subscription, User, UserPayload,
};
use crate::config::ApiConfig;

/// Result of hitting one endpoint from the debug page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Probe {
    pub status: u16,
    pub elapsed_ms: u64,
    /// Whether the response declared a JSON content type.
    pub json: bool,
}

/// Operations the portal needs from its backend.
#[async_trait(?Send)]
pub trait PortalApi: Send + Sync {
    /// `POST /login`.
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError>;
    /// `POST /register`.
    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError>;
    /// `GET /plans`.
    async fn list_plans(&self) -> Result<Vec<Plan>, ApiError>;
    /// `GET /users` (debug page only).
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    /// `POST /subscriptions`.
    async fn create_subscription(&self, request: &CreateSubscriptionRequest) -> Result<Subscription, ApiError>;
    /// `GET /subscriptions/{user_id}`.
    async fn list_subscriptions(&self, user_id: i64) -> Result<Vec<Subscription>, ApiError>;
    /// `DELETE /subscriptions/{id}`.
    async fn cancel_subscription(&self, subscription_id: i64) -> Result<(), ApiError>;
    /// `GET /dashboard`.
    async fn dashboard_stats(&self) -> Result<Vec<DashboardStat>, ApiError>;
    /// `GET` an arbitrary path and report status and latency.
    async fn probe(&self, path: &str) -> Result<Probe, ApiError>;
}

/// Shared handle stored in Leptos context.
pub type SharedApi = Arc<dyn PortalApi>;

/// [`PortalApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Wrap in the shared context handle.
    #[must_use]
    pub fn shared(self) -> SharedApi {
        Arc::new(self)
    }
}

#[async_trait(?Send)]
impl PortalApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let url = self.config.login_url();
        let body = logged(&url, post_text(&url, request).await.map_err(ApiError::for_login))?;
        decode_user(&body)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let url = self.config.register_url();
        let body = logged(&url, post_text(&url, request).await)?;
        decode_user(&body)
    }

    async fn list_plans(&self) -> Result<Vec<Plan>, ApiError> {
        let url = self.config.plans_url();
        decode(&logged(&url, get_text(&url).await)?)
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.config.users_url();
        decode(&logged(&url, get_text(&url).await)?)
    }

    async fn create_subscription(&self, request: &CreateSubscriptionRequest) -> Result<Subscription, ApiError> {
        let url = self.config.subscriptions_url();
        decode(&logged(&url, post_text(&url, request).await)?)
    }

    async fn list_subscriptions(&self, user_id: i64) -> Result<Vec<Subscription>, ApiError> {
        let url = self.config.user_subscriptions_url(user_id);
        decode(&logged(&url, get_text(&url).await)?)
    }

    async fn cancel_subscription(&self, subscription_id: i64) -> Result<(), ApiError> {
        let url = self.config.subscription_url(subscription_id);
        logged(&url, delete_text(&url).await).map(|_| ())
    }

    async fn dashboard_stats(&self) -> Result<Vec<DashboardStat>, ApiError> {
        let url = self.config.dashboard_url();
        decode(&logged(&url, get_text(&url).await)?)
    }

    async fn probe(&self, path: &str) -> Result<Probe, ApiError> {
        let url = if path.is_empty() { self.config.base_url().to_owned() } else { self.config.endpoint(path) };
        logged(&url, probe_url(&url).await)
    }
}

/// Endpoints the debug page checks, as `(label, path)`.
pub const PROBE_TARGETS: [(&str, &str); 3] =
    [("Backend Root", ""), ("Plans Endpoint", "plans"), ("Users Endpoint", "users")];

/// One-line summary of a probe outcome for the debug page.
#[must_use]
pub fn describe_probe(result: &Result<Probe, ApiError>) -> String {
    match result {
        Ok(probe) if probe.json => format!("{} ({}ms) - JSON response", probe.status, probe.elapsed_ms),
        Ok(probe) => format!("{} ({}ms) - non-JSON response", probe.status, probe.elapsed_ms),
        Err(err) => format!("Error: {err}"),
    }
}

fn logged<T>(url: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        leptos::logging::warn!("request to {url} failed: {err}");
    }
    result
}

/// Decode a 2xx body, mapping shape mismatches to [`ApiError::Malformed`].
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

pub(crate) fn decode_user(body: &str) -> Result<User, ApiError> {
    decode::<UserPayload>(body).map(User::from)
}

#[cfg(feature = "csr")]
async fn read_body(sent: Result<gloo_net::http::Response, gloo_net::Error>) -> Result<String, ApiError> {
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::from_response(status, &body));
    }
    Ok(body)
}

#[cfg(feature = "csr")]
async fn get_text(url: &str) -> Result<String, ApiError> {
    read_body(gloo_net::http::Request::get(url).send().await).await
}

#[cfg(feature = "csr")]
async fn delete_text(url: &str) -> Result<String, ApiError> {
    read_body(gloo_net::http::Request::delete(url).send().await).await
}

#[cfg(feature = "csr")]
async fn post_text<B: serde::Serialize>(url: &str, payload: &B) -> Result<String, ApiError> {
    let request = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(request.send().await).await
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
async fn probe_url(url: &str) -> Result<Probe, ApiError> {
    let started = js_sys::Date::now();
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let elapsed = (js_sys::Date::now() - started).max(0.0);
    let json = response
        .headers()
        .get("content-type")
        .is_some_and(|ct| ct.contains("application/json"));
    Ok(Probe { status: response.status(), elapsed_ms: elapsed as u64, json })
}

#[cfg(not(feature = "csr"))]
async fn get_text(url: &str) -> Result<String, ApiError> {
    let _ = url;
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "csr"))]
async fn delete_text(url: &str) -> Result<String, ApiError> {
    let _ = url;
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "csr"))]
async fn post_text<B: serde::Serialize>(url: &str, payload: &B) -> Result<String, ApiError> {
    let _ = (url, payload);
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "csr"))]
async fn probe_url(url: &str) -> Result<Probe, ApiError> {
    let _ = url;
    Err(ApiError::Unavailable)
}
