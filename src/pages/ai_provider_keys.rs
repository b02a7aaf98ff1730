//! Admin-only page for upstream AI provider credentials.

use leptos::prelude::*;

use crate::components::app_shell::AppShell;

#[component]
pub fn AiProviderKeysPage() -> impl IntoView {
    view! {
        <AppShell>
            <h1>"AI provider keys"</h1>
        </AppShell>
    }
}
