//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{RegisterPayload, Role};
use crate::state::session::SessionState;

/// Account creation form. On success the returned session replaces the
/// current one and the user lands on the home page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if pending.get()
            || name.get().trim().is_empty()
            || email.get().trim().is_empty()
            || password.get().is_empty()
        {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let payload = RegisterPayload {
                    name: name.get_untracked().trim().to_owned(),
                    email: email.get_untracked().trim().to_owned(),
                    password: password.get_untracked(),
                    role: role.get_untracked(),
                };
                let outcome = crate::state::session::register(session, &payload).await;
                pending.set(false);
                match outcome {
                    Ok(_) => navigate("/", NavigateOptions::default()),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    });

    view! {
        <div class="auth-page">
            <h1>"Sign up"</h1>

            {move || {
                error.get().map(|message| {
                    view! { <div class="auth-page__error">{message}</div> }
                })
            }}

            <label class="auth-page__label">
                "Full Name"
                <input
                    class="auth-page__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>

            <label class="auth-page__label">
                "Email"
                <input
                    class="auth-page__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>

            <label class="auth-page__label">
                "Password"
                <input
                    class="auth-page__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>

            <label class="auth-page__label">
                "I am a"
                <select
                    class="auth-page__input"
                    on:change=move |ev| {
                        role.set(match event_target_value(&ev).as_str() {
                            "organizer" => Role::Organizer,
                            _ => Role::Student,
                        });
                    }
                >
                    <option value="student" selected=move || role.get() == Role::Student>
                        "Student"
                    </option>
                    <option value="organizer" selected=move || role.get() == Role::Organizer>
                        "Organizer"
                    </option>
                </select>
            </label>

            <button
                class="btn btn--primary auth-page__submit"
                disabled=move || pending.get()
                on:click=move |_| submit.run(())
            >
                {move || if pending.get() { "Creating account..." } else { "Sign up" }}
            </button>

            <p class="auth-page__alt">
                "Already registered? " <a href="/login">"Sign in"</a>
            </p>
        </div>
    }
}
