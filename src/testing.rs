//! Shared fixtures and an in-memory backend for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::net::api::{PortalApi, Probe};
use crate::net::error::ApiError;
use crate::net::types::{
    CreateSubscriptionRequest, DashboardStat, LoginRequest, Plan, RegisterRequest, Subscription, User,
};

pub(crate) fn user(id: i64) -> User {
    User { id, name: format!("user{id}"), email: format!("user{id}@example.com") }
}

pub(crate) fn plan(id: i64, name: &str, minutes: u32) -> Plan {
    Plan { id, name: name.to_owned(), duration_minutes: minutes, price: 5.0 }
}

pub(crate) fn subscription(id: i64, status: &str) -> Subscription {
    Subscription {
        id,
        user_id: 1,
        plan_id: Some(1),
        plan: Some(plan(1, "Basic", 60)),
        plan_name: None,
        status: status.to_owned(),
        created_at: Some("2025-01-05T10:30:00".to_owned()),
        timestamp: None,
        time_bought: None,
        ends_at: Some("2025-01-05T11:30:00".to_owned()),
        time_ends: None,
    }
}

/// Canned responses per endpoint plus a log of every call made.
pub(crate) struct FakeApi {
    pub login: Result<User, ApiError>,
    pub register: Result<User, ApiError>,
    pub plans: Result<Vec<Plan>, ApiError>,
    pub users: Result<Vec<User>, ApiError>,
    pub create: Result<Subscription, ApiError>,
    pub subscriptions: Result<Vec<Subscription>, ApiError>,
    pub cancel: Result<(), ApiError>,
    pub stats: Result<Vec<DashboardStat>, ApiError>,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            login: Err(ApiError::Unavailable),
            register: Err(ApiError::Unavailable),
            plans: Err(ApiError::Unavailable),
            users: Err(ApiError::Unavailable),
            create: Err(ApiError::Unavailable),
            subscriptions: Err(ApiError::Unavailable),
            cancel: Err(ApiError::Unavailable),
            stats: Err(ApiError::Unavailable),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait(?Send)]
impl PortalApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        self.record(format!("POST /login {}", request.email));
        self.login.clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        self.record(format!("POST /register {}", request.email));
        self.register.clone()
    }

    async fn list_plans(&self) -> Result<Vec<Plan>, ApiError> {
        self.record("GET /plans".to_owned());
        self.plans.clone()
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.record("GET /users".to_owned());
        self.users.clone()
    }

    async fn create_subscription(&self, request: &CreateSubscriptionRequest) -> Result<Subscription, ApiError> {
        self.record(format!("POST /subscriptions {} {}", request.user_id, request.plan_id));
        self.create.clone()
    }

    async fn list_subscriptions(&self, user_id: i64) -> Result<Vec<Subscription>, ApiError> {
        self.record(format!("GET /subscriptions/{user_id}"));
        self.subscriptions.clone()
    }

    async fn cancel_subscription(&self, subscription_id: i64) -> Result<(), ApiError> {
        self.record(format!("DELETE /subscriptions/{subscription_id}"));
        self.cancel.clone()
    }

    async fn dashboard_stats(&self) -> Result<Vec<DashboardStat>, ApiError> {
        self.record("GET /dashboard".to_owned());
        self.stats.clone()
    }

    async fn probe(&self, path: &str) -> Result<Probe, ApiError> {
        self.record(format!("PROBE /{path}"));
        Ok(Probe { status: 200, elapsed_ms: 1, json: true })
    }
}
