//! Events listing page with search, filters, booking, and moderation.

use leptos::prelude::*;

use crate::components::event_registration::EventRegistrationDialog;
use crate::net::types::{Event, EventFilters, Role};
use crate::state::session::SessionState;
use crate::util::datetime::format_event_date;

const EVENT_KINDS: [(&str, &str); 5] = [
    ("", "All Types"),
    ("academic", "Academic"),
    ("cultural", "Cultural"),
    ("sports", "Sports"),
    ("technical", "Technical"),
];

/// Events page — searchable, filterable listing. Students book through the
/// registration dialog; organizers and admins create and delete events.
/// Anonymous visitors get a log-in prompt instead of the listing.
#[component]
pub fn EventsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let search = RwSignal::new(String::new());
    let kind = RwSignal::new(String::new());
    let filter_open = RwSignal::new(false);
    let selected = RwSignal::new(None::<Event>);
    let action_error = RwSignal::new(None::<String>);

    let events = LocalResource::new(move || {
        let filters = EventFilters {
            search: search.get(),
            department: String::new(),
            kind: kind.get(),
        };
        async move { crate::net::api::fetch_events(&filters).await }
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            if !confirm("Are you sure you want to delete this event?") {
                return;
            }
            let events = events.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_event(&id).await {
                    Ok(()) => events.refetch(),
                    Err(e) => action_error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let can_manage = move || {
        session
            .get()
            .user()
            .is_some_and(|user| user.role.can_manage_events())
    };
    let is_student = move || {
        session
            .get()
            .user()
            .is_some_and(|user| user.role == Role::Student)
    };

    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| view! {
                <div class="events-page__login-prompt">
                    <h2>"Please Log In"</h2>
                    <p>"You need to be logged in to view events."</p>
                    <a class="btn btn--primary" href="/login">"Log In"</a>
                </div>
            }
        >
            <div class="events-page">
                <header class="events-page__header">
                    <h1>"Events"</h1>

                    <Show when=can_manage>
                        <a class="btn btn--primary" href="/create-event">"Create Event"</a>
                    </Show>

                    <div class="events-page__controls">
                        <input
                            class="events-page__search"
                            type="text"
                            placeholder="Search events..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <div class="events-page__filter">
                            <button
                                class="btn"
                                on:click=move |_| filter_open.update(|open| *open = !*open)
                            >
                                "Filter"
                            </button>
                            <Show when=move || filter_open.get()>
                                <div class="events-page__filter-menu">
                                    {EVENT_KINDS
                                        .into_iter()
                                        .map(|(value, label)| {
                                            let item_class = move || {
                                                if kind.get() == value {
                                                    "events-page__filter-item events-page__filter-item--active"
                                                } else {
                                                    "events-page__filter-item"
                                                }
                                            };
                                            view! {
                                                <button
                                                    class=item_class
                                                    on:click=move |_| {
                                                        kind.set(value.to_owned());
                                                        filter_open.set(false);
                                                    }
                                                >
                                                    {label}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </Show>
                        </div>
                    </div>
                </header>

                {move || {
                    action_error.get().map(|message| {
                        view! { <div class="events-page__error">{message}</div> }
                    })
                }}

                <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                    {move || {
                        events.get().map(|result| match result {
                            Err(error) => view! {
                                <div class="events-page__error">{error.to_string()}</div>
                            }
                                .into_any(),
                            Ok(list) if list.is_empty() => view! {
                                <p class="events-page__empty">"No events found"</p>
                            }
                                .into_any(),
                            Ok(list) => view! {
                                <div class="events-page__grid">
                                    {list
                                        .into_iter()
                                        .map(|event| {
                                            view! {
                                                <EventCard
                                                    event=event
                                                    can_manage=Signal::derive(can_manage)
                                                    is_student=Signal::derive(is_student)
                                                    on_book=Callback::new(move |event| selected.set(Some(event)))
                                                    on_delete=on_delete
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </div>

            {move || {
                selected.get().map(|event| {
                    view! { <EventRegistrationDialog event=event on_close=on_close/> }
                })
            }}
        </Show>
    }
}

/// One event in the listing grid.
#[component]
fn EventCard(
    event: Event,
    can_manage: Signal<bool>,
    is_student: Signal<bool>,
    on_book: Callback<Event>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let href = format!("/events/{}", event.id);
    let delete_id = event.id.clone();
    let date_line = format!("{} at {}", format_event_date(&event.date), event.time);
    let attendance = format!("{}/{} attendees", event.attendees.len(), event.capacity);
    let photo = event.photo.clone().map(|path| {
        let src = if path.starts_with("http") {
            path
        } else {
            crate::net::api::api_url(&path)
        };
        view! { <img class="event-card__photo" src=src alt=event.title.clone()/> }
    });
    let book_event = event.clone();

    view! {
        <div class="event-card">
            {photo}
            <div class="event-card__body">
                <div class="event-card__title-row">
                    <a class="event-card__title" href=href>{event.title.clone()}</a>
                    <Show when=move || can_manage.get()>
                        {
                            let delete_id = delete_id.clone();
                            view! {
                                <button
                                    class="event-card__delete"
                                    title="Delete event"
                                    on:click=move |_| on_delete.run(delete_id.clone())
                                >
                                    "Delete"
                                </button>
                            }
                        }
                    </Show>
                </div>
                <p class="event-card__description">{event.description.clone()}</p>
                <ul class="event-card__meta">
                    <li>{date_line}</li>
                    <li>{event.location.clone()}</li>
                    <li>{attendance}</li>
                    <li class="event-card__kind">{event.kind.clone()}</li>
                </ul>
                <Show when=move || is_student.get()>
                    {
                        let book_event = book_event.clone();
                        view! {
                            <button
                                class="btn btn--primary event-card__book"
                                on:click=move |_| on_book.run(book_event.clone())
                            >
                                "Book Now"
                            </button>
                        }
                    }
                </Show>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
