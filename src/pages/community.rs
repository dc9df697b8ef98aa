//! Community message board.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::datetime::format_timestamp;

/// Community board: message history with a composer at the bottom.
/// Organizers and admins can delete messages. Hidden for anonymous
/// visitors.
#[component]
pub fn CommunityPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let messages = LocalResource::new(|| crate::net::api::fetch_messages());

    let on_send = Callback::new(move |()| {
        let content = draft.get().trim().to_owned();
        if content.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let messages = messages.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::post_message(&content).await {
                    Ok(_) => {
                        draft.set(String::new());
                        error.set(None);
                        messages.refetch();
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = content;
        }
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let messages = messages.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_message(&id).await {
                    Ok(()) => {
                        error.set(None);
                        messages.refetch();
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let can_moderate = move || {
        session
            .get()
            .user()
            .is_some_and(|user| user.role.can_manage_events())
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_send.run(());
        }
    };

    view! {
        <Show when=move || session.get().is_authenticated()>
            <div class="community">
                <h1>"Community Messages"</h1>

                {move || {
                    error.get().map(|message| {
                        view! { <div class="community__error">{message}</div> }
                    })
                }}

                <Suspense fallback=move || view! { <p>"Loading messages..."</p> }>
                    {move || {
                        messages.get().map(|result| match result {
                            Err(error) => view! {
                                <p class="community__error">{error.to_string()}</p>
                            }
                                .into_any(),
                            Ok(list) if list.is_empty() => view! { <p>"No messages yet"</p> }
                                .into_any(),
                            Ok(list) => list
                                .into_iter()
                                .map(|post| {
                                    let delete_id = post.id.clone();
                                    let posted_at = format_timestamp(&post.created_at);
                                    view! {
                                        <div class="community__post">
                                            <div class="community__post-head">
                                                <span class="community__author">{post.user.name}</span>
                                                <span class="community__timestamp">{posted_at}</span>
                                            </div>
                                            <p class="community__content">{post.content}</p>
                                            <Show when=can_moderate>
                                                {
                                                    let delete_id = delete_id.clone();
                                                    view! {
                                                        <button
                                                            class="community__delete"
                                                            on:click=move |_| on_delete.run(delete_id.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    }
                                                }
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any(),
                        })
                    }}
                </Suspense>

                <div class="community__composer">
                    <input
                        class="community__input"
                        type="text"
                        placeholder="Share something with the community..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button
                        class="btn btn--primary"
                        disabled=move || draft.get().trim().is_empty()
                        on:click=move |_| on_send.run(())
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </Show>
    }
}
