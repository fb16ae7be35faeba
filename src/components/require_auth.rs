//! Route wrapper that keeps signed-out visitors off protected screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the auth signal, which follows session events, so a logout on any
//! protected page sends the visitor back to the login screen without the
//! page doing anything itself.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{AppRoute, GuardDecision, guard};

#[component]
pub fn RequireAuth(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let decision = move || auth.with(|state| guard(route, state.user.as_ref()));

    Effect::new(move || {
        if let GuardDecision::Redirect(to) = decision() {
            navigate(to.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision() == GuardDecision::Render
            fallback=|| view! { <p class="page-status">"Redirecting to login..."</p> }
        >
            {children()}
        </Show>
    }
}
