//! Event creation page for organizers and admins.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::NewEvent;

const EVENT_KINDS: [&str; 4] = ["academic", "cultural", "sports", "technical"];

/// New-event form. Posts a multipart form (fields plus an optional photo)
/// and returns to the listing on success. Duplicate submissions are
/// ignored while one is pending.
#[component]
pub fn CreateEventPage() -> impl IntoView {
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let kind = RwSignal::new(String::from("academic"));
    let capacity = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let photo_input = NodeRef::<leptos::html::Input>::new();

    let submit = Callback::new(move |()| {
        if pending.get() {
            return;
        }
        let event = NewEvent {
            title: title.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
            date: date.get(),
            time: time.get(),
            location: location.get().trim().to_owned(),
            department: department.get().trim().to_owned(),
            kind: kind.get(),
            capacity: capacity.get().trim().to_owned(),
        };
        if event.title.is_empty() || event.date.is_empty() || event.location.is_empty() {
            error.set(Some("Title, date, and location are required.".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let photo = photo_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::create_event(&event, photo).await;
                pending.set(false);
                match outcome {
                    Ok(_) => navigate("/events", NavigateOptions::default()),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &event);
        }
    });

    let text_field = move |label: &'static str,
                           input_type: &'static str,
                           value: RwSignal<String>| {
        view! {
            <label class="create-event__label">
                {label}
                <input
                    class="create-event__input"
                    type=input_type
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="create-event">
            <h1>"Create New Event"</h1>

            {move || {
                error.get().map(|message| {
                    view! { <div class="create-event__error">{message}</div> }
                })
            }}

            {text_field("Event Title", "text", title)}

            <label class="create-event__label">
                "Description"
                <textarea
                    class="create-event__input"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>

            {text_field("Date", "date", date)}
            {text_field("Time", "time", time)}
            {text_field("Location", "text", location)}
            {text_field("Department", "text", department)}

            <label class="create-event__label">
                "Event Type"
                <select
                    class="create-event__input"
                    on:change=move |ev| kind.set(event_target_value(&ev))
                >
                    {EVENT_KINDS
                        .into_iter()
                        .map(|value| {
                            view! {
                                <option value=value selected=move || kind.get() == value>
                                    {value}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            {text_field("Capacity", "number", capacity)}

            <label class="create-event__label">
                "Photo"
                <input class="create-event__input" type="file" accept="image/*" node_ref=photo_input/>
            </label>

            <button
                class="btn btn--primary create-event__submit"
                disabled=move || pending.get()
                on:click=move |_| submit.run(())
            >
                {move || if pending.get() { "Creating..." } else { "Create Event" }}
            </button>
        </div>
    }
}
