//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the auth signal and the shared API/session handles from
//! Leptos context; pages pass everything else in as props.

pub mod field_error;
pub mod nav;
pub mod notice_banner;
pub mod plan_card;
pub mod require_auth;
pub mod subscription_item;
