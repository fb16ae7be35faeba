//! Card for one purchasable plan.

use leptos::prelude::*;

use crate::util::format::PlanView;

/// `pending` marks this plan's request in flight; `locked` disables the
/// button while any subscribe is pending.
#[component]
pub fn PlanCard(
    plan: PlanView,
    pending: Signal<bool>,
    locked: Signal<bool>,
    on_subscribe: Callback<i64>,
) -> impl IntoView {
    let id = plan.id;
    view! {
        <div class="plan-card">
            <h3 class="plan-card__name">{plan.name}</h3>
            <p class="plan-card__duration">{plan.duration}</p>
            <p class="plan-card__price">{plan.price}</p>
            <button
                class="btn plan-card__subscribe"
                disabled=move || locked.get()
                on:click=move |_| on_subscribe.run(id)
            >
                {move || if pending.get() { "Subscribing..." } else { "Subscribe" }}
            </button>
        </div>
    }
}
