//! Navigation guard decisions.
//!
//! Evaluated synchronously against the current session for every routed
//! page. Rules fire in a fixed order and only the first match applies:
//!
//! 1. auth required, signed out  -> login (carrying the intended path)
//! 2. guest-only, signed in      -> landing
//! 3. admin required, not admin  -> landing
//! 4. otherwise                  -> allow
//!
//! This is a UX guard only; the backend still enforces access.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use url::Url;

use super::routes::{Access, LANDING, RouteDescriptor, RouteName};
use crate::state::session::Session;

/// Query parameter carrying the path to return to after login.
pub const RETURN_PARAM: &str = "redirect";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Redirect),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: RouteName,
    /// Originally requested full path, only set when redirecting to login.
    pub return_to: Option<String>,
}

impl Redirect {
    fn to(route: RouteName) -> Self {
        Self {
            to: route,
            return_to: None,
        }
    }

    /// Location to navigate to, including the encoded return target.
    pub fn href(&self) -> String {
        match &self.return_to {
            Some(path) => {
                let encoded: String = url::form_urlencoded::byte_serialize(path.as_bytes()).collect();
                format!("{}?{RETURN_PARAM}={encoded}", self.to.path())
            }
            None => self.to.path().to_owned(),
        }
    }
}

/// Decide whether a navigation to `target` (requested as `full_path`) may proceed.
pub fn evaluate(target: &RouteDescriptor, full_path: &str, session: &Session) -> GuardDecision {
    if target.access.requires_auth() && !session.is_authenticated() {
        return GuardDecision::Redirect(Redirect {
            to: RouteName::Login,
            return_to: Some(full_path.to_owned()),
        });
    }

    if target.access == Access::GuestOnly && session.is_authenticated() {
        return GuardDecision::Redirect(Redirect::to(LANDING));
    }

    if target.access == Access::Admin && !session.is_admin() {
        return GuardDecision::Redirect(Redirect::to(LANDING));
    }

    GuardDecision::Allow
}

/// Whether a mounted gate for `access` re-runs the guard on session changes.
///
/// Guest-only pages are checked once per visit: they navigate to their own
/// return target after signing in, and a live rule 2 would replace it.
pub fn tracks_session(access: Access) -> bool {
    access != Access::GuestOnly
}

/// Rebuild the full requested path from router location parts.
///
/// Accepts `search`/`hash` with or without their leading `?`/`#`.
pub fn full_path(pathname: &str, search: &str, hash: &str) -> String {
    let mut path = pathname.to_owned();
    let search = search.trim_start_matches('?');
    if !search.is_empty() {
        path.push('?');
        path.push_str(search);
    }
    let hash = hash.trim_start_matches('#');
    if !hash.is_empty() {
        path.push('#');
        path.push_str(hash);
    }
    path
}

/// Where to go after signing in, given the `redirect` query value.
///
/// Only same-origin absolute paths are honored; anything else lands on the
/// default route. The value is already percent-decoded, so control and
/// whitespace characters are refused outright: browsers strip tabs and
/// newlines before resolving, which would turn `/\t/host` into `//host`.
pub fn return_target(requested: Option<&str>) -> String {
    match requested.map(str::trim) {
        Some(path) if is_local_path(path) => path.to_owned(),
        _ => LANDING.path().to_owned(),
    }
}

/// Origin used only to resolve candidate paths; never contacted.
const RESOLVE_ORIGIN: &str = "https://keydesk.invalid/";

fn is_local_path(path: &str) -> bool {
    if !path.starts_with('/') || path.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return false;
    }
    let Ok(base) = Url::parse(RESOLVE_ORIGIN) else {
        return false;
    };
    base.join(path).is_ok_and(|resolved| resolved.origin() == base.origin())
}
