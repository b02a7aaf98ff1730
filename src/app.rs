//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::route_gate::RouteGate;
use crate::pages::{
    ai_provider_keys::AiProviderKeysPage, api_keys::ApiKeysPage, dashboard::DashboardPage, login::LoginPage,
    register::RegisterPage,
};
use crate::router::routes::{LANDING, RouteName};
use crate::state::auth::AppAuth;

/// Root application component.
///
/// Mounted only after `auth` finished restoring, so the first guard decision
/// already sees the restored session. Route paths mirror `router::routes::ROUTES`.
#[component]
pub fn App(auth: AppAuth) -> impl IntoView {
    provide_meta_context();
    provide_context(auth);

    view! {
        <Title text="keydesk"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=LANDING.path()/> }>
                <Route path=path!("/") view=|| view! { <Redirect path=LANDING.path()/> }/>
                <Route
                    path=path!("/login")
                    view=|| view! { <RouteGate route=RouteName::Login><LoginPage/></RouteGate> }
                />
                <Route
                    path=path!("/register")
                    view=|| view! { <RouteGate route=RouteName::Register><RegisterPage/></RouteGate> }
                />
                <Route
                    path=path!("/dashboard")
                    view=|| view! { <RouteGate route=RouteName::Dashboard><DashboardPage/></RouteGate> }
                />
                <Route
                    path=path!("/api-keys")
                    view=|| view! { <RouteGate route=RouteName::ApiKeys><ApiKeysPage/></RouteGate> }
                />
                <Route
                    path=path!("/admin/ai-provider-keys")
                    view=|| view! { <RouteGate route=RouteName::AiProviderKeys><AiProviderKeysPage/></RouteGate> }
                />
            </Routes>
        </Router>
    }
}
