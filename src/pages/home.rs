//! Landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

struct Feature {
    name: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        name: "Event Discovery",
        description: "Find and join exciting college events happening around you",
    },
    Feature {
        name: "Community",
        description: "Connect with students from your department and across campus",
    },
    Feature {
        name: "Real-time Updates",
        description: "Stay informed with instant notifications about event changes",
    },
    Feature {
        name: "Interactive Learning",
        description: "Engage in hands-on workshops and practical sessions",
    },
];

/// Home page: hero, feature highlights, and a call to action that varies
/// with authentication state.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="home">
            <section class="home__hero">
                <h1>"College Events"</h1>
                <p>"Discover, organize, and join events across your campus."</p>
                {move || {
                    if session.get().is_authenticated() {
                        view! {
                            <a class="btn btn--primary home__cta" href="/events">
                                "Browse Events"
                            </a>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="home__cta-row">
                                <a class="btn btn--primary home__cta" href="/register">
                                    "Get Started"
                                </a>
                                <a class="btn home__cta" href="/login">"Sign in"</a>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>

            <section class="home__features">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="home__feature">
                                <h3>{feature.name}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="home__links">
                <a class="home__link" href="/motivation">"Need a boost? Get your daily motivation"</a>
                <a class="home__link" href="/community">"Join the community conversation"</a>
            </section>
        </div>
    }
}
