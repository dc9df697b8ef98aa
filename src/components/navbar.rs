//! Top navigation bar, varying with session state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::{self, SessionState};

/// Navigation bar: brand, section links, and either the user menu or the
/// sign-in/sign-up pair.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"College Events"</a>

            <div class="navbar__links">
                <a class="navbar__link" href="/">"Home"</a>
                <a class="navbar__link" href="/events">"Events"</a>
                <a class="navbar__link" href="/motivation">"Motivation"</a>
                <a class="navbar__link" href="/community">"Community"</a>
            </div>

            <div class="navbar__session">
                {move || {
                    let state = session.get();
                    match state.user().cloned() {
                        Some(user) => {
                            let navigate = navigate.clone();
                            let is_admin = user.role == Role::Admin;
                            view! {
                                <div class="navbar__menu">
                                    <button
                                        class="navbar__menu-button"
                                        on:click=move |_| menu_open.update(|open| *open = !*open)
                                    >
                                        {user.name.clone()}
                                    </button>
                                    <Show when=move || menu_open.get()>
                                        <div class="navbar__dropdown">
                                            <a class="navbar__dropdown-item" href="/profile">
                                                "Your Profile"
                                            </a>
                                            <Show when=move || is_admin>
                                                <a class="navbar__dropdown-item" href="/admin">
                                                    "Admin Dashboard"
                                                </a>
                                            </Show>
                                            <button
                                                class="navbar__dropdown-item"
                                                on:click={
                                                    let navigate = navigate.clone();
                                                    move |_| {
                                                        menu_open.set(false);
                                                        session::logout(session);
                                                        navigate("/", NavigateOptions::default());
                                                    }
                                                }
                                            >
                                                "Sign out"
                                            </button>
                                        </div>
                                    </Show>
                                </div>
                            }
                                .into_any()
                        }
                        None => view! {
                            <div class="navbar__auth">
                                <a class="btn" href="/login">"Sign in"</a>
                                <a class="btn btn--primary" href="/register">"Sign up"</a>
                            </div>
                        }
                            .into_any(),
                    }
                }}
            </div>
        </nav>
    }
}
