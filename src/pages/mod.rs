//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form or list state and the async calls that feed it,
//! and delegates rendering details to `components`.

pub mod api_debug;
pub mod dashboard;
pub mod login;
pub mod plans;
pub mod signup;
pub mod subscriptions;
