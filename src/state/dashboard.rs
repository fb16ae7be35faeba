//! Dashboard summary state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::error::ApiError;
use crate::net::types::DashboardStat;

const LOAD_FAILED: &str = "Failed to load dashboard";

/// What the dashboard shows for the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub stats: Vec<DashboardStat>,
    pub active_subscriptions: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub summary: Option<DashboardSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<DashboardSummary, ApiError>) {
        self.loading = false;
        match result {
            Ok(summary) => self.summary = Some(summary),
            Err(err) => self.error = Some(err.user_message(LOAD_FAILED)),
        }
    }
}
