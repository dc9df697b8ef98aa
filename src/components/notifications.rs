//! Floating notifications bell with a dropdown list.

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::Notification;
use crate::state::session::SessionState;

/// Notification bell pinned to the top-right corner, rendered only for
/// authenticated users. Shows an unread badge and a dropdown with
/// mark-as-read and delete actions.
#[component]
pub fn NotificationsBell() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let open = RwSignal::new(false);

    let notifications = LocalResource::new(move || {
        let authenticated = session.get().is_authenticated();
        async move {
            if authenticated {
                crate::net::api::fetch_notifications().await
            } else {
                Ok(Vec::new())
            }
        }
    });

    let unread = move || {
        notifications
            .get()
            .and_then(Result::ok)
            .map(|list| list.iter().filter(|n| !n.read).count())
            .unwrap_or(0)
    };

    let mark_read = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let notifications = notifications.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::mark_notification_read(&id).await {
                    leptos::logging::warn!("mark notification read failed: {e}");
                }
                notifications.refetch();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let notifications = notifications.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::delete_notification(&id).await {
                    leptos::logging::warn!("delete notification failed: {e}");
                }
                notifications.refetch();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <Show when=move || session.get().is_authenticated()>
            <div class="notifications">
                <button
                    class="notifications__bell"
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    <svg class="notifications__icon" viewBox="0 0 24 24" aria-hidden="true">
                        <path d="M12 22a2 2 0 0 0 2-2h-4a2 2 0 0 0 2 2zm6-6v-5a6 6 0 1 0-12 0v5l-2 2v1h16v-1z"></path>
                    </svg>
                    <Show when=move || (unread() > 0)>
                        <span class="notifications__badge">{unread}</span>
                    </Show>
                </button>

                <Show when=move || open.get()>
                    <div class="notifications__dropdown">
                        <h3 class="notifications__title">"Notifications"</h3>
                        {move || match notifications.get() {
                            None => view! {
                                <p class="notifications__empty">"Loading notifications..."</p>
                            }
                                .into_any(),
                            Some(Err(error)) => view! {
                                <p class="notifications__error">{error_text(&error)}</p>
                            }
                                .into_any(),
                            Some(Ok(list)) if list.is_empty() => view! {
                                <p class="notifications__empty">"No notifications"</p>
                            }
                                .into_any(),
                            Some(Ok(list)) => list
                                .into_iter()
                                .map(|n| notification_row(n, mark_read, delete))
                                .collect::<Vec<_>>()
                                .into_any(),
                        }}
                    </div>
                </Show>
            </div>
        </Show>
    }
}

fn error_text(error: &ApiError) -> String {
    format!("Failed to fetch notifications: {error}")
}

fn notification_row(
    notification: Notification,
    mark_read: Callback<String>,
    delete: Callback<String>,
) -> impl IntoView {
    let read_id = notification.id.clone();
    let delete_id = notification.id.clone();
    let is_read = notification.read;
    let row_class = if notification.read {
        "notifications__item"
    } else {
        "notifications__item notifications__item--unread"
    };

    view! {
        <div class=row_class>
            <div class="notifications__body">
                <p class="notifications__item-title">{notification.title}</p>
                <p class="notifications__item-message">{notification.message}</p>
            </div>
            <div class="notifications__actions">
                <Show when=move || !is_read>
                    {
                        let read_id = read_id.clone();
                        view! {
                            <button
                                class="notifications__action"
                                on:click=move |_| mark_read.run(read_id.clone())
                            >
                                "Mark as read"
                            </button>
                        }
                    }
                </Show>
                <button
                    class="notifications__action notifications__action--danger"
                    on:click=move |_| delete.run(delete_id.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
