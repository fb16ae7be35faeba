//! Plan catalogue state for the Plans page.
//!
//! DESIGN
//! ======
//! Plans are re-fetched on every visit; subscribe is one-at-a-time so a
//! double click cannot fire two purchases.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use super::notice::Notice;
use crate::net::error::ApiError;
use crate::net::types::{Plan, Subscription};
use crate::util::format::PlanView;

const LOAD_FAILED: &str = "Failed to load plans";
const SUBSCRIBE_FAILED: &str = "Failed to create subscription";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlansState {
    pub items: Vec<Plan>,
    pub loading: bool,
    pub error: Option<String>,
    /// Plan with a subscribe request in flight.
    pub pending_plan: Option<i64>,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl PlansState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Plan>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(err) => self.error = Some(err.user_message(LOAD_FAILED)),
        }
    }

    /// Returns `false` if another subscribe is still pending.
    pub fn begin_subscribe(&mut self, plan_id: i64) -> bool {
        if self.pending_plan.is_some() {
            return false;
        }
        self.pending_plan = Some(plan_id);
        self.notice = None;
        true
    }

    /// Record the outcome and return the notice to show.
    pub fn finish_subscribe(&mut self, plan_id: i64, result: &Result<Subscription, ApiError>) -> Notice {
        self.pending_plan = None;
        self.notice_seq += 1;
        let notice = match result {
            Ok(_) => {
                let name = self.plan_name(plan_id).unwrap_or("your plan");
                Notice::success(format!("Subscribed to {name}!"), self.notice_seq)
            }
            Err(err) => Notice::from_error(err, SUBSCRIBE_FAILED, self.notice_seq),
        };
        self.notice = Some(notice.clone());
        notice
    }

    /// Clear the banner if it is still the one numbered `seq`.
    pub fn expire_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }

    #[must_use]
    pub fn plan_name(&self, plan_id: i64) -> Option<&str> {
        self.items
            .iter()
            .find(|plan| plan.id == plan_id)
            .map(|plan| plan.name.as_str())
    }

    #[must_use]
    pub fn views(&self) -> Vec<PlanView> {
        self.items.iter().map(PlanView::new).collect()
    }
}
