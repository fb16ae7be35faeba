use super::*;

#[test]
fn new_strips_trailing_slash() {
    let config = ApiConfig::new("https://portal.example.com/");
    assert_eq!(config.base_url(), "https://portal.example.com");
    assert_eq!(config.login_url(), "https://portal.example.com/login");
}

#[test]
fn blank_url_uses_default() {
    assert_eq!(ApiConfig::new("   ").base_url(), DEFAULT_API_URL);
}

#[test]
fn endpoints_derive_from_base() {
    let config = ApiConfig::new("http://api.test");
    assert_eq!(config.register_url(), "http://api.test/register");
    assert_eq!(config.plans_url(), "http://api.test/plans");
    assert_eq!(config.users_url(), "http://api.test/users");
    assert_eq!(config.dashboard_url(), "http://api.test/dashboard");
    assert_eq!(config.subscriptions_url(), "http://api.test/subscriptions");
    assert_eq!(config.user_subscriptions_url(12), "http://api.test/subscriptions/12");
    assert_eq!(config.subscription_url(99), "http://api.test/subscriptions/99");
}

#[test]
fn endpoint_accepts_leading_slash() {
    let config = ApiConfig::new("http://api.test");
    assert_eq!(config.endpoint("/plans"), "http://api.test/plans");
}
