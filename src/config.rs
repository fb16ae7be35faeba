//! Backend location and endpoint paths.
//!
//! The base URL is baked in at build time from `PORTAL_API_URL`; every
//! endpoint is derived from it so the app can be pointed at another backend
//! without touching call sites.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `PORTAL_API_URL` is unset at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for `base_url`, dropping trailing slashes.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Load from the build-time `PORTAL_API_URL`, falling back to
    /// [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(option_env!("PORTAL_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` (with or without a leading slash).
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        self.endpoint("login")
    }

    #[must_use]
    pub fn register_url(&self) -> String {
        self.endpoint("register")
    }

    #[must_use]
    pub fn plans_url(&self) -> String {
        self.endpoint("plans")
    }

    #[must_use]
    pub fn users_url(&self) -> String {
        self.endpoint("users")
    }

    #[must_use]
    pub fn dashboard_url(&self) -> String {
        self.endpoint("dashboard")
    }

    #[must_use]
    pub fn subscriptions_url(&self) -> String {
        self.endpoint("subscriptions")
    }

    /// `GET` target listing one user's subscriptions.
    #[must_use]
    pub fn user_subscriptions_url(&self, user_id: i64) -> String {
        self.endpoint(&format!("subscriptions/{user_id}"))
    }

    /// `DELETE` target for a single subscription.
    #[must_use]
    pub fn subscription_url(&self, subscription_id: i64) -> String {
        self.endpoint(&format!("subscriptions/{subscription_id}"))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
