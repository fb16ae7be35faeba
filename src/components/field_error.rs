//! Inline validation message under a form field.

#[cfg(test)]
#[path = "field_error_test.rs"]
mod field_error_test;

use leptos::prelude::*;

/// Error to display for a field right now.
///
/// Messages appear as soon as the user has typed something, and for every
/// field once a submit has been attempted.
#[must_use]
pub fn visible_error(value: &str, submitted: bool, error: Option<String>) -> Option<String> {
    (submitted || !value.is_empty()).then_some(error).flatten()
}

#[component]
pub fn FieldError(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="field-error" role="alert">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
