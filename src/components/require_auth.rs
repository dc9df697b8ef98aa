//! Route gate for authenticated and role-restricted pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::guard::{self, RouteDecision};
use crate::state::session::SessionState;

/// Wraps a routed page and enforces the route-guard decision.
///
/// The decision is re-evaluated on every mount and session change, so each
/// navigation onto a guarded route gets a fresh verdict. Redirects go to
/// `/login` for missing sessions and `/` for insufficient roles.
#[component]
pub fn RequireAuth(
    /// Roles allowed through; omit to admit any authenticated user.
    #[prop(optional, into)]
    roles: Option<Vec<Role>>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| guard::decide(&session.get(), roles.as_deref()));

    Effect::new(move || {
        if let RouteDecision::RedirectTo(path) = decision.get() {
            navigate(path, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || decision.get() == RouteDecision::Render>
            {children()}
        </Show>
    }
}
