//! Subscriptions page: the signed-in user's subscriptions with cancel.

#[cfg(test)]
#[path = "subscriptions_test.rs"]
mod subscriptions_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notice_banner::{NoticeBanner, schedule_expiry};
use crate::components::subscription_item::SubscriptionItem;
use crate::net::api::SharedApi;
use crate::services::subscriptions::{cancel, load_subscriptions};
use crate::state::auth::AuthState;
use crate::state::subscriptions::SubscriptionsState;
use crate::util::auth::AppRoute;

/// Header line such as `"2 active of 3"`.
fn active_summary(active: usize, total: usize) -> String {
    format!("{active} active of {total}")
}

#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<SharedApi>();
    let state = RwSignal::new(SubscriptionsState::default());

    if let Some(user) = auth.get_untracked().user {
        state.update(SubscriptionsState::begin_load);
        let load_api = api.clone();
        leptos::task::spawn_local(async move {
            let result = load_subscriptions(load_api.as_ref(), &user).await;
            state.try_update(|s| s.finish_load(result));
        });
    }

    let on_cancel = Callback::new(move |id: i64| {
        if !state.try_update(|s| s.begin_cancel(id)).unwrap_or(false) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = cancel(api.as_ref(), id).await;
            if let Some(Some(notice)) = state.try_update(|s| s.finish_cancel(id, &result)) {
                schedule_expiry(&notice, move |seq| {
                    state.try_update(|s| s.expire_notice(seq));
                });
            }
        });
    });

    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));
    let is_empty = move || state.with(|s| !s.loading && s.error.is_none() && s.items.is_empty());

    view! {
        <div class="subscriptions-page">
            <h1>"My Subscriptions"</h1>
            <Show when=move || state.with(|s| !s.items.is_empty())>
                <p class="subscriptions-page__summary">
                    {move || state.with(|s| active_summary(s.active_count(), s.items.len()))}
                </p>
            </Show>
            <NoticeBanner notice=notice/>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="page-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="page-status">"Loading subscriptions..."</p> }
            >
                <Show when=is_empty>
                    <p class="page-status">
                        "You have no subscriptions yet. "
                        <A href=AppRoute::Plans.path()>"Browse plans"</A>
                    </p>
                </Show>
                <ul class="subscriptions-page__list">
                    {move || {
                        state
                            .with(SubscriptionsState::views)
                            .into_iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <SubscriptionItem
                                        item=item
                                        cancelling=Signal::derive(move || state.with(|s| s.cancelling == Some(id)))
                                        on_cancel=on_cancel
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}
