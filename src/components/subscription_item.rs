//! One row of the subscriptions list.

use leptos::prelude::*;

use crate::util::format::SubscriptionView;

#[component]
pub fn SubscriptionItem(
    item: SubscriptionView,
    cancelling: Signal<bool>,
    on_cancel: Callback<i64>,
) -> impl IntoView {
    let id = item.id;
    let cancellable = item.cancellable;
    view! {
        <li class="subscription-item">
            <div class="subscription-item__header">
                <span class="subscription-item__plan">{item.plan_name}</span>
                <span class=format!("subscription-item__status {}", item.status_class)>{item.status}</span>
            </div>
            <dl class="subscription-item__times">
                <dt>"Purchased"</dt>
                <dd>{item.purchased}</dd>
                <dt>"Expires"</dt>
                <dd>{item.expires}</dd>
                {item.duration.map(|d| view! {
                    <dt>"Duration"</dt>
                    <dd>{d}</dd>
                })}
            </dl>
            <Show when=move || cancellable>
                <button
                    class="btn subscription-item__cancel"
                    disabled=move || cancelling.get()
                    on:click=move |_| on_cancel.run(id)
                >
                    {move || if cancelling.get() { "Cancelling..." } else { "Cancel" }}
                </button>
            </Show>
        </li>
    }
}
