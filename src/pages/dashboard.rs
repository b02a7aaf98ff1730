//! Dashboard page, the authenticated landing route.

use leptos::prelude::*;

use crate::components::app_shell::AppShell;
use crate::router::routes::RouteName;
use crate::state::auth::AppAuth;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AppAuth>();
    let greeting = move || match auth.user() {
        Some(user) => format!("Welcome back, {}.", user.name),
        None => "Welcome back.".to_owned(),
    };

    view! {
        <AppShell>
            <h1>"Dashboard"</h1>
            <p>{greeting}</p>
            <a href=RouteName::ApiKeys.path()>"Manage API keys"</a>
        </AppShell>
    }
}
