//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::{FieldError, visible_error};
use crate::net::api::SharedApi;
use crate::services::auth::{REGISTER_FAILED, register};
use crate::session::Session;
use crate::util::auth::AppRoute;
use crate::util::validate::{SignupForm, validate_signup};

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<SharedApi>();
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let banner = RwSignal::new(None::<String>);

    let read_form = move || SignupForm {
        username: username.get_untracked(),
        email: email.get_untracked(),
        password: password.get_untracked(),
        confirm: confirm.get_untracked(),
    };
    let live = Memo::new(move |_| {
        let form = SignupForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm: confirm.get(),
        };
        validate_signup(&form).err().unwrap_or_default()
    });
    let username_error =
        Signal::derive(move || visible_error(&username.get(), submitted.get(), live.get().username));
    let email_error = Signal::derive(move || visible_error(&email.get(), submitted.get(), live.get().email));
    let password_error =
        Signal::derive(move || visible_error(&password.get(), submitted.get(), live.get().password));
    let confirm_error = Signal::derive(move || visible_error(&confirm.get(), submitted.get(), live.get().confirm));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        submitted.set(true);
        banner.set(None);
        let form = read_form();
        if validate_signup(&form).is_err() {
            return;
        }
        busy.set(true);

        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match register(api.as_ref(), &session, &form).await {
                Ok(success) => navigate(success.redirect.path(), NavigateOptions::default()),
                Err(err) => {
                    banner.set(err.banner(REGISTER_FAILED));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate=true>
                <h1>"Create Account"</h1>
                <Show when=move || banner.get().is_some()>
                    <p class="auth-card__error" role="alert">{move || banner.get().unwrap_or_default()}</p>
                </Show>
                <label class="auth-field">
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <FieldError message=username_error/>
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
                <label class="auth-field">
                    "Confirm Password"
                    <input
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <FieldError message=confirm_error/>
                <button class="btn auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                </button>
                <p class="auth-card__switch">
                    "Already registered? "
                    <A href=AppRoute::Login.path()>"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
