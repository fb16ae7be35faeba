//! The signed-in user's subscription list.
//!
//! DESIGN
//! ======
//! Cancels are applied locally on success instead of re-fetching; a failed
//! cancel leaves the list untouched and raises a notice.

#[cfg(test)]
#[path = "subscriptions_test.rs"]
mod subscriptions_test;

use super::notice::Notice;
use crate::net::error::ApiError;
use crate::net::types::Subscription;
use crate::util::format::{SubscriptionView, is_cancelled};

const LOAD_FAILED: &str = "Failed to load subscriptions";
const CANCEL_FAILED: &str = "Failed to cancel subscription";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubscriptionsState {
    pub items: Vec<Subscription>,
    pub loading: bool,
    pub error: Option<String>,
    /// Subscription with a cancel request in flight.
    pub cancelling: Option<i64>,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl SubscriptionsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Subscription>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(err) => self.error = Some(err.user_message(LOAD_FAILED)),
        }
    }

    /// Returns `false` if `id` is not listed or another cancel is pending.
    pub fn begin_cancel(&mut self, id: i64) -> bool {
        if self.cancelling.is_some() || !self.contains(id) {
            return false;
        }
        self.cancelling = Some(id);
        self.notice = None;
        true
    }

    /// Drop `id` on success; on failure keep the list and return a notice.
    pub fn finish_cancel(&mut self, id: i64, result: &Result<(), ApiError>) -> Option<Notice> {
        self.cancelling = None;
        match result {
            Ok(()) => {
                self.items.retain(|sub| sub.id != id);
                None
            }
            Err(err) => {
                self.notice_seq += 1;
                let notice = Notice::from_error(err, CANCEL_FAILED, self.notice_seq);
                self.notice = Some(notice.clone());
                Some(notice)
            }
        }
    }

    pub fn expire_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|sub| sub.id == id)
    }

    /// Subscriptions that have not been cancelled.
    #[must_use]
    pub fn active_count(&self) -> usize {
        count_active(&self.items)
    }

    #[must_use]
    pub fn views(&self) -> Vec<SubscriptionView> {
        self.items.iter().map(SubscriptionView::new).collect()
    }
}

#[must_use]
pub fn count_active(items: &[Subscription]) -> usize {
    items.iter().filter(|sub| !is_cancelled(&sub.status)).count()
}
