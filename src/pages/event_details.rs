//! Event details page: full record, booking, moderation, and motivation
//! content management.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{Event, MotivationContent, Quote, Role, Tip};
use crate::state::session::SessionState;
use crate::util::datetime::format_event_date;

/// Event details — booking for attendees, delete for the organizer and
/// admins, and motivation content (generated or hand-added) below the
/// event record.
#[component]
pub fn EventDetailsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let event_id = Memo::new(move |_| params.get().get("id").unwrap_or_default());

    let event = LocalResource::new(move || {
        let id = event_id.get();
        async move { crate::net::api::fetch_event(&id).await }
    });

    let action_error = RwSignal::new(None::<String>);
    let show_motivation_form = RwSignal::new(false);
    let quote_text = RwSignal::new(String::new());
    let quote_author = RwSignal::new(String::new());
    let tip_text = RwSignal::new(String::new());

    let on_book = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let event = event.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::book_event(&id).await {
                    Ok(()) => {
                        action_error.set(None);
                        event.refetch();
                    }
                    Err(e) => action_error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_cancel = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let event = event.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::cancel_booking(&id).await {
                    Ok(()) => {
                        action_error.set(None);
                        event.refetch();
                    }
                    Err(e) => action_error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_generate = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let event = event.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::generate_event_motivation(&id).await {
                    Ok(()) => {
                        action_error.set(None);
                        event.refetch();
                    }
                    Err(e) => action_error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_delete = Callback::new({
        let navigate = navigate.clone();
        move |id: String| {
            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::delete_event(&id).await {
                        Ok(()) => navigate("/events", NavigateOptions::default()),
                        Err(e) => action_error.set(Some(e.to_string())),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = id;
            }
        }
    });

    let on_save = Callback::new(move |(id, content): (String, MotivationContent)| {
        show_motivation_form.set(false);
        #[cfg(feature = "hydrate")]
        {
            let event = event.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_event_motivation(&id, &content).await {
                    Ok(()) => {
                        action_error.set(None);
                        event.refetch();
                    }
                    Err(e) => action_error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, content);
        }
    });

    let back = {
        let navigate = navigate.clone();
        move |_| navigate("/events", NavigateOptions::default())
    };

    view! {
        <div class="event-details">
            <button class="event-details__back" on:click=back>
                "Back to Events"
            </button>

            {move || {
                action_error.get().map(|message| {
                    view! { <div class="event-details__error">{message}</div> }
                })
            }}

            <Suspense fallback=move || view! { <p>"Loading event..."</p> }>
                {move || {
                    event.get().map(|result| match result {
                        Err(error) => view! {
                            <div class="event-details__error">{error.to_string()}</div>
                        }
                            .into_any(),
                        Ok(ev) => {
                            let state = session.get();
                            let user = state.user();
                            let user_id = user.map(|u| u.id.clone()).unwrap_or_default();
                            let is_admin = user.is_some_and(|u| u.role == Role::Admin);
                            let is_organizer = user.is_some_and(|u| u.id == ev.organizer.id);
                            let is_attending = ev.has_attendee(&user_id);
                            let authenticated = state.is_authenticated();

                            view! {
                                <EventRecord
                                    event=ev.clone()
                                    can_moderate=is_admin || is_organizer
                                    on_delete=on_delete
                                />

                                <MotivationSection
                                    event=ev.clone()
                                    can_edit=is_admin || is_organizer
                                    show_form=show_motivation_form
                                    quote_text=quote_text
                                    quote_author=quote_author
                                    tip_text=tip_text
                                    on_generate=on_generate
                                    on_save=on_save
                                />

                                <Show when=move || authenticated && !is_organizer>
                                    {
                                        let ev = ev.clone();
                                        move || {
                                            let id = ev.id.clone();
                                            if is_attending {
                                                view! {
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_cancel.run(id.clone())
                                                    >
                                                        "Cancel Booking"
                                                    </button>
                                                }
                                                    .into_any()
                                            } else if ev.is_full() {
                                                view! {
                                                    <button class="btn" disabled=true>"Event Full"</button>
                                                }
                                                    .into_any()
                                            } else {
                                                view! {
                                                    <button
                                                        class="btn btn--primary"
                                                        on:click=move |_| on_book.run(id.clone())
                                                    >
                                                        "Book Event"
                                                    </button>
                                                }
                                                    .into_any()
                                            }
                                        }
                                    }
                                </Show>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// The event record itself: photo, organizer, schedule, and description.
#[component]
fn EventRecord(event: Event, can_moderate: bool, on_delete: Callback<String>) -> impl IntoView {
    let delete_id = event.id.clone();
    let date_line = format!("{} at {}", format_event_date(&event.date), event.time);
    let attendance = format!("{}/{} attendees", event.attendees.len(), event.capacity);
    let organized_by = format!("Organized by {}", event.organizer.name);
    let photo = event.photo.clone().map(|path| {
        let src = if path.starts_with("http") {
            path
        } else {
            crate::net::api::api_url(&path)
        };
        view! { <img class="event-details__photo" src=src alt=event.title.clone()/> }
    });

    view! {
        <section class="event-details__record">
            {photo}
            <header class="event-details__header">
                <div>
                    <h1>{event.title.clone()}</h1>
                    <p class="event-details__organizer">{organized_by}</p>
                </div>
                <Show when=move || can_moderate>
                    {
                        let delete_id = delete_id.clone();
                        view! {
                            <button
                                class="btn btn--danger"
                                on:click=move |_| on_delete.run(delete_id.clone())
                            >
                                "Delete"
                            </button>
                        }
                    }
                </Show>
            </header>

            <dl class="event-details__facts">
                <dt>"Date & Time"</dt>
                <dd>{date_line}</dd>
                <dt>"Location"</dt>
                <dd>{event.location.clone()}</dd>
                <dt>"Capacity"</dt>
                <dd>{attendance}</dd>
                <dt>"Department"</dt>
                <dd>{event.department.clone()}</dd>
                <dt>"Description"</dt>
                <dd>{event.description.clone()}</dd>
            </dl>
        </section>
    }
}

/// Motivation content attached to the event, with generate/add controls
/// for the organizer and admins.
#[component]
fn MotivationSection(
    event: Event,
    can_edit: bool,
    show_form: RwSignal<bool>,
    quote_text: RwSignal<String>,
    quote_author: RwSignal<String>,
    tip_text: RwSignal<String>,
    on_generate: Callback<String>,
    on_save: Callback<(String, MotivationContent)>,
) -> impl IntoView {
    let content = event.motivation_content.clone().unwrap_or_default();
    let generate_id = event.id.clone();
    let quote_event_id = event.id.clone();
    let tip_event_id = event.id.clone();
    let quote_content = content.clone();
    let tip_content = content.clone();

    let add_quote = move |_| {
        let text = quote_text.get().trim().to_owned();
        let author = quote_author.get().trim().to_owned();
        if text.is_empty() || author.is_empty() {
            return;
        }
        let mut next = quote_content.clone();
        next.quotes.push(Quote { text, author });
        quote_text.set(String::new());
        quote_author.set(String::new());
        on_save.run((quote_event_id.clone(), next));
    };

    let add_tip = move |_| {
        let text = tip_text.get().trim().to_owned();
        if text.is_empty() {
            return;
        }
        let mut next = tip_content.clone();
        next.tips.push(Tip { text });
        tip_text.set(String::new());
        on_save.run((tip_event_id.clone(), next));
    };

    view! {
        <section class="event-details__motivation">
            <header class="event-details__motivation-header">
                <h2>"Motivation Content"</h2>
                <Show when=move || can_edit>
                    {
                        let generate_id = generate_id.clone();
                        view! {
                            <div class="event-details__motivation-actions">
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| on_generate.run(generate_id.clone())
                                >
                                    "Generate Content"
                                </button>
                                <button
                                    class="btn"
                                    on:click=move |_| show_form.update(|open| *open = !*open)
                                >
                                    "Add Manually"
                                </button>
                            </div>
                        }
                    }
                </Show>
            </header>

            <Show when=move || show_form.get() && can_edit>
                <div class="event-details__motivation-form">
                    <div class="event-details__motivation-column">
                        <h3>"Add Quote"</h3>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Quote"
                            prop:value=move || quote_text.get()
                            on:input=move |ev| quote_text.set(event_target_value(&ev))
                        />
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Author"
                            prop:value=move || quote_author.get()
                            on:input=move |ev| quote_author.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" on:click=add_quote.clone()>
                            "Add Quote"
                        </button>
                    </div>
                    <div class="event-details__motivation-column">
                        <h3>"Add Tip"</h3>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Tip"
                            prop:value=move || tip_text.get()
                            on:input=move |ev| tip_text.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" on:click=add_tip.clone()>
                            "Add Tip"
                        </button>
                    </div>
                </div>
            </Show>

            <div class="event-details__motivation-lists">
                <div>
                    <h3>"Motivational Quotes"</h3>
                    {content
                        .quotes
                        .iter()
                        .map(|quote| {
                            view! {
                                <blockquote class="event-details__quote">
                                    <p>{format!("\u{201c}{}\u{201d}", quote.text)}</p>
                                    <footer>{format!("- {}", quote.author)}</footer>
                                </blockquote>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div>
                    <h3>"Success Tips"</h3>
                    {content
                        .tips
                        .iter()
                        .map(|tip| view! { <p class="event-details__tip">{tip.text.clone()}</p> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
