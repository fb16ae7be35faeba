use super::*;

fn alice() -> User {
    User { id: 1, name: "alice".to_owned(), email: "alice@example.com".to_owned() }
}

fn protected_routes() -> impl Iterator<Item = AppRoute> {
    AppRoute::ALL.into_iter().filter(|route| route.is_protected())
}

#[test]
fn protected_routes_redirect_without_session() {
    for route in protected_routes() {
        assert_eq!(guard(route, None), GuardDecision::Redirect(AppRoute::Login), "{route:?}");
    }
}

#[test]
fn protected_routes_render_with_session() {
    let user = alice();
    for route in protected_routes() {
        assert_eq!(guard(route, Some(&user)), GuardDecision::Render, "{route:?}");
    }
}

#[test]
fn public_routes_always_render() {
    assert_eq!(guard(AppRoute::Login, None), GuardDecision::Render);
    assert_eq!(guard(AppRoute::Signup, None), GuardDecision::Render);
}

#[test]
fn only_login_and_signup_are_public() {
    let public: Vec<_> = AppRoute::ALL.into_iter().filter(|r| !r.is_protected()).collect();
    assert_eq!(public, vec![AppRoute::Login, AppRoute::Signup]);
}

#[test]
fn every_route_has_a_distinct_path() {
    let mut paths: Vec<_> = AppRoute::ALL.iter().map(|r| r.path()).collect();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), AppRoute::ALL.len());
}

#[test]
fn auth_lands_on_dashboard() {
    assert_eq!(POST_AUTH_ROUTE.path(), "/dashboard");
}
