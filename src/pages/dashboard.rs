//! Dashboard page: greeting, backend stats, and the active subscription
//! count.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::SharedApi;
use crate::services::subscriptions::load_dashboard;
use crate::state::auth::AuthState;
use crate::state::dashboard::DashboardState;
use crate::util::auth::AppRoute;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<SharedApi>();
    let state = RwSignal::new(DashboardState::default());

    if let Some(user) = auth.get_untracked().user {
        state.update(DashboardState::begin_load);
        leptos::task::spawn_local(async move {
            let result = load_dashboard(api.as_ref(), &user).await;
            state.try_update(|s| s.finish_load(result));
        });
    }

    let greeting = move || auth.with(|a| format!("Welcome, {}!", a.display_name().unwrap_or("there")));

    view! {
        <div class="dashboard-page">
            <h1>{greeting}</h1>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="page-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="page-status">"Loading dashboard..."</p> }
            >
                {move || {
                    state
                        .with(|s| s.summary.clone())
                        .map(|summary| {
                            view! {
                                <div class="dashboard-page__stats">
                                    <div class="stat-card stat-card--highlight">
                                        <span class="stat-card__value">{summary.active_subscriptions}</span>
                                        <span class="stat-card__title">"Active Subscriptions"</span>
                                    </div>
                                    {summary
                                        .stats
                                        .into_iter()
                                        .map(|stat| {
                                            view! {
                                                <div class="stat-card">
                                                    <span class="stat-card__value">{stat.value}</span>
                                                    <span class="stat-card__title">{stat.title}</span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                }}
            </Show>
            <div class="dashboard-page__actions">
                <A href=AppRoute::Plans.path()>"Browse Plans"</A>
                <A href=AppRoute::Subscriptions.path()>"My Subscriptions"</A>
            </div>
        </div>
    }
}
