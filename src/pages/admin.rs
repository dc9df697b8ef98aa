//! Admin dashboard: moderation view over all events.

use leptos::prelude::*;

use crate::util::datetime::format_event_date;

/// Admin-only moderation table: every event with its attendance and a
/// delete action.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let action_error = RwSignal::new(None::<String>);

    let events = LocalResource::new(|| async {
        crate::net::api::fetch_events(&crate::net::types::EventFilters::default()).await
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let events = events.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_event(&id).await {
                    Ok(()) => {
                        action_error.set(None);
                        events.refetch();
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

    view! {
        <div class="admin">
            <h1>"Admin Dashboard"</h1>

            {move || {
                action_error.get().map(|message| {
                    view! { <div class="admin__error">{message}</div> }
                })
            }}

            <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                {move || {
                    events.get().map(|result| match result {
                        Err(error) => view! {
                            <p class="admin__error">{error.to_string()}</p>
                        }
                            .into_any(),
                        Ok(list) if list.is_empty() => view! { <p>"No events to moderate"</p> }
                            .into_any(),
                        Ok(list) => view! {
                            <table class="admin__table">
                                <thead>
                                    <tr>
                                        <th>"Title"</th>
                                        <th>"Date"</th>
                                        <th>"Organizer"</th>
                                        <th>"Attendance"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|event| {
                                            let delete_id = event.id.clone();
                                            let attendance = format!(
                                                "{}/{}",
                                                event.attendees.len(),
                                                event.capacity,
                                            );
                                            view! {
                                                <tr>
                                                    <td>{event.title}</td>
                                                    <td>{format_event_date(&event.date)}</td>
                                                    <td>{event.organizer.name}</td>
                                                    <td>{attendance}</td>
                                                    <td>
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click=move |_| on_delete.run(delete_id.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                            .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
