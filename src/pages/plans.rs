//! Plans page: list purchasable plans and subscribe to one.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. Plans are fetched on every visit. A subscribe result is
//! shown as a banner that clears itself after the notice's display time.

use leptos::prelude::*;

use crate::components::notice_banner::{NoticeBanner, schedule_expiry};
use crate::components::plan_card::PlanCard;
use crate::net::api::SharedApi;
use crate::services::subscriptions::subscribe;
use crate::state::auth::AuthState;
use crate::state::plans::PlansState;

#[component]
pub fn PlansPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<SharedApi>();
    let state = RwSignal::new(PlansState::default());

    state.update(PlansState::begin_load);
    let load_api = api.clone();
    leptos::task::spawn_local(async move {
        let result = load_api.list_plans().await;
        state.try_update(|s| s.finish_load(result));
    });

    let on_subscribe = Callback::new(move |plan_id: i64| {
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        if !state.try_update(|s| s.begin_subscribe(plan_id)).unwrap_or(false) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = subscribe(api.as_ref(), &user, plan_id).await;
            if let Some(notice) = state.try_update(|s| s.finish_subscribe(plan_id, &result)) {
                schedule_expiry(&notice, move |seq| {
                    state.try_update(|s| s.expire_notice(seq));
                });
            }
        });
    });

    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));
    let locked = Signal::derive(move || state.with(|s| s.pending_plan.is_some()));

    view! {
        <div class="plans-page">
            <h1>"Available Plans"</h1>
            <NoticeBanner notice=notice/>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="page-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="page-status">"Loading plans..."</p> }
            >
                <div class="plans-page__grid">
                    {move || {
                        state
                            .with(PlansState::views)
                            .into_iter()
                            .map(|plan| {
                                let id = plan.id;
                                view! {
                                    <PlanCard
                                        plan=plan
                                        pending=Signal::derive(move || state.with(|s| s.pending_plan == Some(id)))
                                        locked=locked
                                        on_subscribe=on_subscribe
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
