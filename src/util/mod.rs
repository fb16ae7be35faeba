//! Pure helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing, validation, and formatting decisions out of
//! component code so they can be tested without a browser.

pub mod auth;
pub mod format;
pub mod validate;
