//! Display adapters for plans and subscriptions.
//!
//! DESIGN
//! ======
//! Pages render these view structs rather than raw DTOs, keeping all
//! string-munging in pure functions.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

#[cfg(not(feature = "csr"))]
use time::format_description::BorrowedFormatItem;
#[cfg(not(feature = "csr"))]
use time::format_description::well_known::{Rfc2822, Rfc3339};
#[cfg(not(feature = "csr"))]
use time::macros::format_description;
#[cfg(not(feature = "csr"))]
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::net::types::{Plan, Subscription};

const INVALID_DATE: &str = "Invalid Date";
const UNKNOWN_PLAN: &str = "Unknown Plan";
const MISSING_TIME: &str = "Unknown";

#[cfg(not(feature = "csr"))]
const NAIVE_ISO: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");

#[cfg(not(feature = "csr"))]
const EN_US: &[BorrowedFormatItem<'_>] = format_description!(
    "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period]"
);

/// CSS modifier for a subscription status; matching ignores case.
#[must_use]
pub fn status_class(status: &str) -> &'static str {
    match status.trim().to_lowercase().replace('_', " ").as_str() {
        "active" => "status-active",
        "almost over" => "status-almost",
        "cancelled" => "status-cancelled",
        _ => "",
    }
}

#[must_use]
pub fn is_cancelled(status: &str) -> bool {
    status.trim().eq_ignore_ascii_case("cancelled")
}

/// Minutes under an hour as-is, otherwise whole hours rounded down.
#[must_use]
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    plural(minutes / 60, "hour")
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 { format!("1 {unit}") } else { format!("{count} {unit}s") }
}

#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Locale-formatted date and time for a backend timestamp.
///
/// In the browser the runtime locale decides the layout; elsewhere the en-US
/// layout in UTC is used.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if date.get_time().is_nan() {
            return INVALID_DATE.to_owned();
        }
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "csr"))]
    {
        parse_timestamp(raw)
            .and_then(|dt| dt.format(EN_US).ok())
            .unwrap_or_else(|| INVALID_DATE.to_owned())
    }
}

fn format_optional_timestamp(raw: Option<&str>) -> String {
    raw.map_or_else(|| MISSING_TIME.to_owned(), format_timestamp)
}

/// Parse RFC 3339, naive ISO 8601 (as Python's `isoformat` emits), or
/// RFC 2822. Offsets are normalized to UTC.
#[cfg(not(feature = "csr"))]
fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    let to_utc = |dt: OffsetDateTime| {
        let utc = dt.to_offset(UtcOffset::UTC);
        PrimitiveDateTime::new(utc.date(), utc.time())
    };
    OffsetDateTime::parse(raw, &Rfc3339)
        .map(to_utc)
        .or_else(|_| PrimitiveDateTime::parse(raw, NAIVE_ISO))
        .or_else(|_| OffsetDateTime::parse(raw, &Rfc2822).map(to_utc))
        .ok()
}

/// Display-ready subscription row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriptionView {
    pub id: i64,
    pub plan_name: String,
    pub status: String,
    pub status_class: &'static str,
    pub purchased: String,
    pub expires: String,
    /// Plan length, when the plan is embedded.
    pub duration: Option<String>,
    pub cancellable: bool,
}

impl SubscriptionView {
    #[must_use]
    pub fn new(sub: &Subscription) -> Self {
        Self {
            id: sub.id,
            plan_name: sub.plan_display_name().unwrap_or(UNKNOWN_PLAN).to_owned(),
            status: sub.status.clone(),
            status_class: status_class(&sub.status),
            purchased: format_optional_timestamp(sub.purchased_at()),
            expires: format_optional_timestamp(sub.expires_at()),
            duration: sub.plan.as_ref().map(|plan| format_duration(plan.duration_minutes)),
            cancellable: !is_cancelled(&sub.status),
        }
    }
}

/// Display-ready plan card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanView {
    pub id: i64,
    pub name: String,
    pub duration: String,
    pub price: String,
}

impl PlanView {
    #[must_use]
    pub fn new(plan: &Plan) -> Self {
        Self {
            id: plan.id,
            name: plan.name.clone(),
            duration: format_duration(plan.duration_minutes),
            price: format_price(plan.price),
        }
    }
}
