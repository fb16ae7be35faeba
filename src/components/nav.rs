//! Top navigation bar.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::services::auth::logout;
use crate::session::Session;
use crate::state::auth::AuthState;
use crate::util::auth::AppRoute;

/// Links for the current auth state: protected screens once signed in,
/// the public ones otherwise.
fn links(signed_in: bool) -> Vec<AppRoute> {
    AppRoute::ALL.into_iter().filter(|route| route.is_protected() == signed_in).collect()
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();
    let signed_in = move || auth.with(AuthState::is_authenticated);

    let on_logout = move |_| logout(&session);

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"WiFi Portal"</span>
            <ul class="navbar__links">
                {move || {
                    links(signed_in())
                        .into_iter()
                        .map(|route| {
                            view! {
                                <li>
                                    <A href=route.path()>{route.label()}</A>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <Show when=signed_in>
                <span class="navbar__user">
                    {move || auth.with(|a| a.display_name().unwrap_or_default().to_owned())}
                </span>
                <button class="btn navbar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
