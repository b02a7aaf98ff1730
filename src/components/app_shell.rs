//! Layout for signed-in pages: navigation, current user, logout.

use leptos::prelude::*;

use crate::router::routes::RouteName;
use crate::state::auth::AppAuth;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = expect_context::<AppAuth>();

    let auth_name = auth.clone();
    let user_name = move || auth_name.user().map(|user| user.name).unwrap_or_default();
    let auth_admin = auth.clone();
    let is_admin = move || auth_admin.is_admin();

    // Route gates react to the cleared session and send the user to login.
    let on_logout = move |_| auth.logout();

    view! {
        <div class="app-shell">
            <nav class="app-nav">
                <a href=RouteName::Dashboard.path()>"Dashboard"</a>
                <a href=RouteName::ApiKeys.path()>"API keys"</a>
                <Show when=is_admin>
                    <a href=RouteName::AiProviderKeys.path()>"AI provider keys"</a>
                </Show>
                <span class="app-nav__user">{user_name}</span>
                <button class="app-nav__logout" on:click=on_logout>
                    "Log out"
                </button>
            </nav>
            <main class="app-main">{children()}</main>
        </div>
    }
}
