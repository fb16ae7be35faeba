//! Plan purchase, subscription listing, cancellation, and the dashboard
//! summary.

#[cfg(test)]
#[path = "subscriptions_test.rs"]
mod subscriptions_test;

use leptos::logging::{log, warn};

use crate::net::api::PortalApi;
use crate::net::error::ApiError;
use crate::net::types::{CreateSubscriptionRequest, Subscription, User};
use crate::state::dashboard::DashboardSummary;
use crate::state::subscriptions::count_active;

/// Buy `plan_id` for `user`.
///
/// # Errors
///
/// A 409 surfaces as [`ApiError::Conflict`] when the user already holds an
/// active subscription.
pub async fn subscribe(api: &dyn PortalApi, user: &User, plan_id: i64) -> Result<Subscription, ApiError> {
    let request = CreateSubscriptionRequest { user_id: user.id, plan_id };
    let created = api.create_subscription(&request).await?;
    log!("user {} subscribed to plan {plan_id} as #{}", user.id, created.id);
    Ok(created)
}

/// # Errors
///
/// Propagates the API failure.
pub async fn load_subscriptions(api: &dyn PortalApi, user: &User) -> Result<Vec<Subscription>, ApiError> {
    api.list_subscriptions(user.id).await
}

/// Cancel one subscription by id.
///
/// # Errors
///
/// Propagates the API failure; callers keep their list unchanged.
pub async fn cancel(api: &dyn PortalApi, subscription_id: i64) -> Result<(), ApiError> {
    api.cancel_subscription(subscription_id).await?;
    log!("cancelled subscription #{subscription_id}");
    Ok(())
}

/// Backend-wide stats plus the user's active subscription count.
///
/// Stats are optional: older backends lack `/dashboard`, so a failure there
/// only empties the stats list.
///
/// # Errors
///
/// Fails when the user's subscriptions cannot be listed.
pub async fn load_dashboard(api: &dyn PortalApi, user: &User) -> Result<DashboardSummary, ApiError> {
    let stats = api.dashboard_stats().await.unwrap_or_else(|err| {
        warn!("dashboard stats unavailable: {err}");
        Vec::new()
    });
    let subscriptions = api.list_subscriptions(user.id).await?;
    Ok(DashboardSummary { stats, active_subscriptions: count_active(&subscriptions) })
}
