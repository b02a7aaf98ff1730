//! API key management page.

use leptos::prelude::*;

use crate::components::app_shell::AppShell;

#[component]
pub fn ApiKeysPage() -> impl IntoView {
    view! {
        <AppShell>
            <h1>"API keys"</h1>
        </AppShell>
    }
}
