//! Registration page: creates an account and signs in with it.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::router::guard::{RETURN_PARAM, return_target};
use crate::router::routes::RouteName;
use crate::state::auth::AppAuth;

#[derive(Clone, Debug, PartialEq, Eq)]
struct RegisterForm {
    name: String,
    email: String,
    password: String,
    confirmation: String,
}

fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirmation: &str,
) -> Result<RegisterForm, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email and password.");
    }
    if password != confirmation {
        return Err("Passwords do not match.");
    }
    Ok(RegisterForm {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirmation: confirmation.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AppAuth>();
    let navigate = use_navigate();
    let query = use_query_map();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = match validate_register_input(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirmation.get_untracked(),
        ) {
            Ok(form) => form,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let target = return_target(query.with_untracked(|q| q.get(RETURN_PARAM)).as_deref());
        let auth = auth.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = auth
                .register(&form.name, &form.email, &form.password, &form.confirmation)
                .await;
            match result {
                Ok(()) => navigate(&target, NavigateOptions::default()),
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create account"</h1>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirmation.get()
                    on:input=move |ev| confirmation.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-switch">
                    "Already registered? "
                    <a href=RouteName::Login.path()>"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
