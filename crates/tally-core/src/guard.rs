//! Navigation guarding as a declarative middleware list
//!
//! Each check is a pure function of the current session and the target
//! route. The list is evaluated before every navigation commit; the first
//! check that does not allow the navigation wins. Nothing is cached, so a
//! session change is picked up by the next navigation.

use crate::routes::{self, RouteMeta};
use crate::session::Session;

/// Redirect target for rejected navigations. The originally requested
/// path is discarded; there is no return-to deep link.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of evaluating the middleware list for one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDecision {
    Allow,
    Redirect(&'static str),
}

/// A single navigation check
pub type NavCheck = fn(&Session, &RouteMeta) -> NavDecision;

/// Redirect guarded routes to the login page when no session is present
pub fn require_auth(session: &Session, route: &RouteMeta) -> NavDecision {
    if route.requires_auth && !session.is_authenticated() {
        NavDecision::Redirect(LOGIN_PATH)
    } else {
        NavDecision::Allow
    }
}

/// The middleware list applied to every navigation
pub fn checks() -> &'static [NavCheck] {
    &[require_auth]
}

/// Run `checks` in order; the first non-Allow decision wins
pub fn evaluate(checks: &[NavCheck], session: &Session, route: &RouteMeta) -> NavDecision {
    checks
        .iter()
        .map(|check| check(session, route))
        .find(|decision| *decision != NavDecision::Allow)
        .unwrap_or(NavDecision::Allow)
}

/// Decide a navigation to `path` under the standard middleware list
///
/// Unknown paths are allowed through; the router's fallback handles them.
pub fn decide(session: &Session, path: &str) -> NavDecision {
    match routes::resolve(path) {
        Some(route) => evaluate(checks(), session, route),
        None => NavDecision::Allow,
    }
}
