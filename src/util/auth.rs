//! Route table and the auth gate in front of it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page is wrapped in the same guard so unauthenticated
//! visitors are sent to `/login` before any protected view is built.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Screens reachable in the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Signup,
    Dashboard,
    Plans,
    Subscriptions,
    ApiDebug,
}

/// Where login and registration land.
pub const POST_AUTH_ROUTE: AppRoute = AppRoute::Dashboard;

impl AppRoute {
    pub const ALL: [Self; 6] =
        [Self::Login, Self::Signup, Self::Dashboard, Self::Plans, Self::Subscriptions, Self::ApiDebug];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::Plans => "/plans",
            Self::Subscriptions => "/subscriptions",
            Self::ApiDebug => "/debug",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign Up",
            Self::Dashboard => "Dashboard",
            Self::Plans => "Plans",
            Self::Subscriptions => "Subscriptions",
            Self::ApiDebug => "API Debug",
        }
    }

    #[must_use]
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::Login | Self::Signup)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(AppRoute),
}

/// Decide whether `route` may render for the current session user.
#[must_use]
pub fn guard(route: AppRoute, user: Option<&User>) -> GuardDecision {
    if route.is_protected() && user.is_none() {
        GuardDecision::Redirect(AppRoute::Login)
    } else {
        GuardDecision::Render
    }
}
