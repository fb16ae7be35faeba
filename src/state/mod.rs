//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page (`plans`, `subscriptions`, `dashboard`) plus the
//! cross-cutting `auth` mirror, so each component depends on a small model.

pub mod auth;
pub mod dashboard;
pub mod notice;
pub mod plans;
pub mod subscriptions;
