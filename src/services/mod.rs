//! Async actions that pair an API call with its effect on client state.

pub mod auth;
pub mod subscriptions;
