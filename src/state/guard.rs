//! Route authorization: the pure allow/redirect decision for guarded
//! routes.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::SessionState;

/// What a guarded route should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    RedirectTo(&'static str),
}

/// Decide whether a guarded route renders or redirects.
///
/// Anyone not authenticated goes to the login page; an authenticated user
/// whose role is outside a non-empty restriction goes home. Deterministic
/// and side-effect free; evaluated on every navigation, never cached.
pub fn decide(session: &SessionState, required: Option<&[Role]>) -> RouteDecision {
    let Some(user) = session.user() else {
        return RouteDecision::RedirectTo("/login");
    };
    match required {
        Some(roles) if !roles.is_empty() && !roles.contains(&user.role) => {
            RouteDecision::RedirectTo("/")
        }
        _ => RouteDecision::Render,
    }
}
