use super::*;

#[test]
fn load_success_stores_summary() {
    let mut state = DashboardState::default();
    state.begin_load();
    assert!(state.loading);

    let summary = DashboardSummary {
        stats: vec![DashboardStat { id: 1, title: "Total Users".to_owned(), value: 4 }],
        active_subscriptions: 1,
    };
    state.finish_load(Ok(summary.clone()));

    assert!(!state.loading);
    assert_eq!(state.summary, Some(summary));
    assert_eq!(state.error, None);
}

#[test]
fn load_failure_prefers_backend_message() {
    let mut state = DashboardState::default();
    state.begin_load();
    state.finish_load(Err(ApiError::Rejected { status: 500, message: Some("db down".to_owned()) }));
    assert_eq!(state.error.as_deref(), Some("db down"));
}

#[test]
fn reload_clears_previous_error() {
    let mut state = DashboardState::default();
    state.finish_load(Err(ApiError::Unavailable));
    state.begin_load();
    assert_eq!(state.error, None);
}
