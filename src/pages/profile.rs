//! Profile page: principal details and the user's events.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::datetime::format_event_date;

/// Profile page for any authenticated user. The record comes straight from
/// the session principal; the events list is fetched per visit.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let my_events = LocalResource::new(|| crate::net::api::fetch_my_events());

    view! {
        <div class="profile">
            <section class="profile__card">
                <h1>"Profile Information"</h1>
                <p class="profile__hint">"Personal details and events."</p>

                {move || {
                    session.get().user().cloned().map(|user| {
                        view! {
                            <dl class="profile__facts">
                                <dt>"Full name"</dt>
                                <dd>{user.name.clone()}</dd>
                                <dt>"Email address"</dt>
                                <dd>{user.email.clone()}</dd>
                                <dt>"Role"</dt>
                                <dd>{user.role.label()}</dd>
                            </dl>
                        }
                    })
                }}
            </section>

            <section class="profile__events">
                <h2>"Your Events"</h2>
                <Suspense fallback=move || view! { <p>"Loading your events..."</p> }>
                    {move || {
                        my_events.get().map(|result| match result {
                            Err(error) => view! {
                                <p class="profile__error">{error.to_string()}</p>
                            }
                                .into_any(),
                            Ok(list) if list.is_empty() => view! {
                                <p>"You haven't created any events yet."</p>
                            }
                                .into_any(),
                            Ok(list) => view! {
                                <div class="profile__grid">
                                    {list
                                        .into_iter()
                                        .map(|event| {
                                            let href = format!("/events/{}", event.id);
                                            let date_line = format_event_date(&event.date);
                                            view! {
                                                <a class="profile__event" href=href>
                                                    <span class="profile__event-title">
                                                        {event.title}
                                                    </span>
                                                    <span class="profile__event-date">{date_line}</span>
                                                </a>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
