use super::*;
use crate::net::types::User;
use crate::router::routes::ROUTES;

fn signed_out() -> Session {
    Session::default()
}

fn signed_in(is_admin: bool) -> Session {
    Session::authenticated(
        "T".to_owned(),
        User {
            id: 1,
            name: "Ann".to_owned(),
            email: "a@b.com".to_owned(),
            is_admin,
        },
    )
}

fn public_route() -> RouteDescriptor {
    RouteDescriptor {
        path: "/about",
        name: RouteName::Dashboard,
        access: Access::Public,
    }
}

fn landing() -> GuardDecision {
    GuardDecision::Redirect(Redirect {
        to: RouteName::Dashboard,
        return_to: None,
    })
}

// =============================================================
// Rule 1: auth required
// =============================================================

#[test]
fn signed_out_visit_to_protected_route_redirects_to_login_with_return_path() {
    for route in ROUTES.iter().filter(|r| r.access.requires_auth()) {
        let requested = format!("{}?page=2", route.path);
        let decision = evaluate(route, &requested, &signed_out());
        assert_eq!(
            decision,
            GuardDecision::Redirect(Redirect {
                to: RouteName::Login,
                return_to: Some(requested.clone()),
            })
        );
    }
}

#[test]
fn signed_out_admin_route_goes_to_login_not_landing() {
    let decision = evaluate(
        RouteName::AiProviderKeys.descriptor(),
        "/admin/ai-provider-keys",
        &signed_out(),
    );
    assert!(matches!(
        decision,
        GuardDecision::Redirect(Redirect {
            to: RouteName::Login,
            ..
        })
    ));
}

#[test]
fn signed_in_visit_to_protected_route_is_allowed() {
    let decision = evaluate(RouteName::ApiKeys.descriptor(), "/api-keys", &signed_in(false));
    assert_eq!(decision, GuardDecision::Allow);
}

// =============================================================
// Rule 2: guest only
// =============================================================

#[test]
fn signed_in_visit_to_guest_route_redirects_to_landing() {
    for route in ROUTES.iter().filter(|r| r.access == Access::GuestOnly) {
        assert_eq!(evaluate(route, route.path, &signed_in(false)), landing());
        assert_eq!(evaluate(route, route.path, &signed_in(true)), landing());
    }
}

#[test]
fn signed_out_visit_to_guest_route_is_allowed() {
    let decision = evaluate(RouteName::Login.descriptor(), "/login", &signed_out());
    assert_eq!(decision, GuardDecision::Allow);
}

// =============================================================
// Rule 3: admin only
// =============================================================

#[test]
fn non_admin_visit_to_admin_route_redirects_to_landing() {
    let decision = evaluate(
        RouteName::AiProviderKeys.descriptor(),
        "/admin/ai-provider-keys",
        &signed_in(false),
    );
    assert_eq!(decision, landing());
}

#[test]
fn admin_visit_to_admin_route_is_allowed() {
    let decision = evaluate(
        RouteName::AiProviderKeys.descriptor(),
        "/admin/ai-provider-keys",
        &signed_in(true),
    );
    assert_eq!(decision, GuardDecision::Allow);
}

#[test]
fn token_without_user_is_not_admin() {
    let session = Session {
        token: Some("T".to_owned()),
        user: None,
    };
    let decision = evaluate(RouteName::AiProviderKeys.descriptor(), "/admin/ai-provider-keys", &session);
    assert_eq!(decision, landing());
}

// =============================================================
// Rule 4: allow
// =============================================================

#[test]
fn public_route_is_always_allowed() {
    let route = public_route();
    assert_eq!(evaluate(&route, "/about", &signed_out()), GuardDecision::Allow);
    assert_eq!(evaluate(&route, "/about", &signed_in(false)), GuardDecision::Allow);
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn login_redirect_href_encodes_return_path() {
    let redirect = Redirect {
        to: RouteName::Login,
        return_to: Some("/api-keys?tab=1".to_owned()),
    };
    assert_eq!(redirect.href(), "/login?redirect=%2Fapi-keys%3Ftab%3D1");
}

#[test]
fn landing_redirect_href_is_plain_path() {
    assert_eq!(Redirect::to(LANDING).href(), "/dashboard");
}

#[test]
fn full_path_joins_parts_with_or_without_prefixes() {
    assert_eq!(full_path("/api-keys", "", ""), "/api-keys");
    assert_eq!(full_path("/api-keys", "tab=1", "top"), "/api-keys?tab=1#top");
    assert_eq!(full_path("/api-keys", "?tab=1", "#top"), "/api-keys?tab=1#top");
}

#[test]
fn return_target_accepts_local_paths() {
    assert_eq!(return_target(Some("/api-keys?tab=1")), "/api-keys?tab=1");
}

#[test]
fn return_target_rejects_foreign_or_missing_values() {
    assert_eq!(return_target(None), "/dashboard");
    assert_eq!(return_target(Some("")), "/dashboard");
    assert_eq!(return_target(Some("https://evil.example")), "/dashboard");
    assert_eq!(return_target(Some("//evil.example")), "/dashboard");
    assert_eq!(return_target(Some("/\\evil.example")), "/dashboard");
    assert_eq!(return_target(Some("/\t/evil.example/x")), "/dashboard");
}

#[test]
fn return_target_rejects_paths_with_control_or_whitespace() {
    assert_eq!(return_target(Some("/\t/evil.example/x")), "/dashboard");
    assert_eq!(return_target(Some("/\n/evil.example")), "/dashboard");
    assert_eq!(return_target(Some("/\r\n/evil.example")), "/dashboard");
    assert_eq!(return_target(Some("/api keys")), "/dashboard");
}

#[test]
fn return_target_keeps_encoded_slashes_local() {
    assert_eq!(return_target(Some("/%2F/evil.example")), "/%2F/evil.example");
}

// =============================================================
// Session tracking
// =============================================================

#[test]
fn guest_routes_do_not_track_session() {
    for route in &ROUTES {
        assert_eq!(tracks_session(route.access), route.access != Access::GuestOnly);
    }
    assert!(!tracks_session(RouteName::Login.descriptor().access));
    assert!(tracks_session(RouteName::Dashboard.descriptor().access));
}

#[test]
fn login_decision_taken_on_visit_survives_sign_in() {
    // The gate keeps the decision made while signed out; re-evaluating after
    // sign-in would bounce to the landing route instead of the return target.
    let route = RouteName::Login.descriptor();
    let on_visit = evaluate(route, "/login?redirect=%2Fapi-keys", &signed_out());
    assert_eq!(on_visit, GuardDecision::Allow);
    assert!(!tracks_session(route.access));
    assert_eq!(evaluate(route, "/login?redirect=%2Fapi-keys", &signed_in(false)), landing());
}

#[test]
fn allowed_decision_is_stable_across_query_and_hash_changes() {
    let route = RouteName::ApiKeys.descriptor();
    let session = signed_in(false);
    let before = evaluate(route, &full_path("/api-keys", "", ""), &session);
    let after = evaluate(route, &full_path("/api-keys", "tab=2", "top"), &session);
    assert_eq!(before, after);
}
