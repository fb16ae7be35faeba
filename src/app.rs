//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::NavBar;
use crate::components::require_auth::RequireAuth;
use crate::config::ApiConfig;
use crate::net::api::HttpApi;
use crate::pages::{
    api_debug::ApiDebugPage, dashboard::DashboardPage, login::LoginPage, plans::PlansPage, signup::SignupPage,
    subscriptions::SubscriptionsPage,
};
use crate::session::Session;
use crate::session::store::SessionStore;
use crate::state::auth::AuthState;
use crate::util::auth::AppRoute;

/// Root application component.
///
/// Provides the API client, the session, and the auth signal, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_env();
    let api = HttpApi::new(config.clone()).shared();
    let session = Session::new(SessionStore::browser());
    let auth = RwSignal::new(AuthState::from_session(&session));

    // Keep the auth signal in step with every sign-in and sign-out.
    let listener = session.events().subscribe(move |event| {
        auth.try_update(|state| state.apply(event));
    });
    let events = session.events().clone();
    on_cleanup(move || {
        events.unsubscribe(listener);
    });

    provide_context(config);
    provide_context(api);
    provide_context(session);
    provide_context(auth);

    view! {
        <Title text="WiFi Portal"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireAuth route=AppRoute::Dashboard><DashboardPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("plans")
                        view=|| view! { <RequireAuth route=AppRoute::Plans><PlansPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("subscriptions")
                        view=|| {
                            view! {
                                <RequireAuth route=AppRoute::Subscriptions>
                                    <SubscriptionsPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("debug")
                        view=|| view! { <RequireAuth route=AppRoute::ApiDebug><ApiDebugPage/></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
