use super::*;
use crate::net::types::User;

fn authenticated(role: Role) -> SessionState {
    SessionState::Authenticated(User {
        id: "u-1".to_owned(),
        name: "Priya".to_owned(),
        email: "priya@college.edu".to_owned(),
        role,
    })
}

#[test]
fn anonymous_redirects_to_login() {
    assert_eq!(
        decide(&SessionState::Anonymous, Some(&[Role::Admin])),
        RouteDecision::RedirectTo("/login")
    );
}

#[test]
fn unresolved_states_redirect_to_login() {
    assert_eq!(
        decide(&SessionState::Unresolved, None),
        RouteDecision::RedirectTo("/login")
    );
    assert_eq!(
        decide(&SessionState::Authenticating, None),
        RouteDecision::RedirectTo("/login")
    );
}

#[test]
fn wrong_role_redirects_home() {
    assert_eq!(
        decide(&authenticated(Role::Student), Some(&[Role::Admin, Role::Organizer])),
        RouteDecision::RedirectTo("/")
    );
}

#[test]
fn matching_role_renders() {
    assert_eq!(
        decide(&authenticated(Role::Organizer), Some(&[Role::Admin, Role::Organizer])),
        RouteDecision::Render
    );
}

#[test]
fn no_role_restriction_renders_any_authenticated_user() {
    assert_eq!(decide(&authenticated(Role::Student), None), RouteDecision::Render);
}

#[test]
fn empty_role_restriction_renders() {
    assert_eq!(decide(&authenticated(Role::Student), Some(&[])), RouteDecision::Render);
}
