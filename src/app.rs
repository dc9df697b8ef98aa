//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::notifications::NotificationsBell;
use crate::components::require_auth::RequireAuth;
use crate::net::types::Role;
use crate::pages::{
    about::AboutPage, admin::AdminDashboardPage, community::CommunityPage,
    create_event::CreateEventPage, event_details::EventDetailsPage, events::EventsPage,
    home::HomePage, login::LoginPage, motivation::MotivationPage, payment::PaymentPage,
    privacy_policy::PrivacyPolicyPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context, runs the one-time session
/// bootstrap, and withholds all dependent rendering until the session has
/// resolved to `Authenticated` or `Anonymous`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Single session slot for the whole page; written only by the
    // transitions in `state::session`.
    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(crate::state::session::resume(session));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-events-ui.css"/>
        <Title text="College Events"/>

        <Router>
            <Show
                when=move || session.get().is_resolved()
                fallback=|| view! { <div class="app-shell__resolving">"Loading..."</div> }
            >
                <div class="app-shell">
                    <Navbar/>
                    <NotificationsBell/>
                    <main class="app-shell__main">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("login") view=LoginPage/>
                            <Route path=StaticSegment("register") view=RegisterPage/>
                            <Route path=StaticSegment("events") view=EventsPage/>
                            <Route
                                path=(StaticSegment("events"), ParamSegment("id"))
                                view=EventDetailsPage
                            />
                            <Route path=StaticSegment("community") view=CommunityPage/>
                            <Route path=StaticSegment("motivation") view=MotivationPage/>
                            <Route path=StaticSegment("payment") view=PaymentPage/>
                            <Route path=StaticSegment("about") view=AboutPage/>
                            <Route path=StaticSegment("privacy-policy") view=PrivacyPolicyPage/>
                            <Route
                                path=StaticSegment("create-event")
                                view=|| view! {
                                    <RequireAuth roles=vec![Role::Admin, Role::Organizer]>
                                        <CreateEventPage/>
                                    </RequireAuth>
                                }
                            />
                            <Route
                                path=StaticSegment("profile")
                                view=|| view! {
                                    <RequireAuth>
                                        <ProfilePage/>
                                    </RequireAuth>
                                }
                            />
                            <Route
                                path=StaticSegment("admin")
                                view=|| view! {
                                    <RequireAuth roles=vec![Role::Admin]>
                                        <AdminDashboardPage/>
                                    </RequireAuth>
                                }
                            />
                        </Routes>
                    </main>
                    <Footer/>
                </div>
            </Show>
        </Router>
    }
}
