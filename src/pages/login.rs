//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Email/password login form. Duplicate submissions are ignored while a
/// request is pending; failures surface the auth client's message and
/// leave the session untouched.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if pending.get() || email.get().trim().is_empty() || password.get().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let outcome = crate::state::session::login(
                    session,
                    email.get_untracked().trim(),
                    &password.get_untracked(),
                )
                .await;
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
            <h1>"Sign in"</h1>

            {move || {
                error.get().map(|message| {
                    view! { <div class="auth-page__error">{message}</div> }
                })
            }}

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
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>

            <button
                class="btn btn--primary auth-page__submit"
                disabled=move || pending.get()
                on:click=move |_| submit.run(())
            >
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>

            <p class="auth-page__alt">
                "No account yet? " <a href="/register">"Sign up"</a>
            </p>
        </div>
    }
}
