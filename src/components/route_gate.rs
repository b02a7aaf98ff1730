//! Applies navigation guard decisions to routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `<Route>` view is wrapped in a `RouteGate`. The guard runs during
//! render, so a redirected page is never built. Signed-in pages keep the
//! decision in a memo over session and location (a logout on a protected page
//! lands on login); query or hash changes that leave it unchanged do not
//! rebuild the page. Guest-only pages are decided once per visit, so a login
//! in progress can navigate to its own return target.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::router::guard::{self, GuardDecision, full_path};
use crate::router::routes::RouteName;
use crate::state::auth::AppAuth;

/// Render `children` only when the guard allows `route` for the current session.
#[component]
pub fn RouteGate(route: RouteName, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AppAuth>().session();
    let location = use_location();
    let descriptor = route.descriptor();

    if !guard::tracks_session(descriptor.access) {
        let requested = full_path(
            &location.pathname.get_untracked(),
            &location.search.get_untracked(),
            &location.hash.get_untracked(),
        );
        let decision = session.with_untracked(|session| guard::evaluate(descriptor, &requested, session));
        return render(route, decision, &children);
    }

    let decision = Memo::new(move |_| {
        let requested = full_path(&location.pathname.get(), &location.search.get(), &location.hash.get());
        session.with(|session| guard::evaluate(descriptor, &requested, session))
    });

    (move || render(route, decision.get(), &children)).into_any()
}

fn render(route: RouteName, decision: GuardDecision, children: &ChildrenFn) -> AnyView {
    match decision {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Redirect(redirect) => {
            log::debug!("guard: {} -> {}", route.as_str(), redirect.to.as_str());
            let options = NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            };
            view! { <Redirect path=redirect.href() options=options/> }.into_any()
        }
    }
}
