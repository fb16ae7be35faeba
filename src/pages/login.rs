//! Login page: email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. On success the session is saved and the visitor is sent to
//! the post-login screen; the navigation bar updates from the session event.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::{FieldError, visible_error};
use crate::net::api::SharedApi;
use crate::services::auth::{LOGIN_FAILED, login};
use crate::session::Session;
use crate::util::auth::AppRoute;
use crate::util::validate::{LoginForm, validate_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<SharedApi>();
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let banner = RwSignal::new(None::<String>);

    let live = Memo::new(move |_| {
        let form = LoginForm { email: email.get(), password: password.get() };
        validate_login(&form).err().unwrap_or_default()
    });
    let email_error = Signal::derive(move || visible_error(&email.get(), submitted.get(), live.get().email));
    let password_error =
        Signal::derive(move || visible_error(&password.get(), submitted.get(), live.get().password));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        submitted.set(true);
        banner.set(None);
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        if validate_login(&form).is_err() {
            return;
        }
        busy.set(true);

        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match login(api.as_ref(), &session, &form).await {
                Ok(success) => navigate(success.redirect.path(), NavigateOptions::default()),
                Err(err) => {
                    banner.set(err.banner(LOGIN_FAILED));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate=true>
                <h1>"Sign In"</h1>
                <Show when=move || banner.get().is_some()>
                    <p class="auth-card__error" role="alert">{move || banner.get().unwrap_or_default()}</p>
                </Show>
                <label class="auth-field">
                    "Email"
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <FieldError message=email_error/>
                <label class="auth-field">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <FieldError message=password_error/>
                <button class="btn auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <p class="auth-card__switch">
                    "No account? "
                    <A href=AppRoute::Signup.path()>"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
