//! Daily motivation page.

use leptos::prelude::*;

use crate::net::types::MotivationContent;

/// Motivation page: share a feeling, get personalized quotes and tips
/// back from the motivation endpoint.
#[component]
pub fn MotivationPage() -> impl IntoView {
    let feeling = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);
    let result = RwSignal::new(None::<MotivationContent>);

    let submit = Callback::new(move |()| {
        let text = feeling.get().trim().to_owned();
        if pending.get() || text.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::request_motivation(&text).await;
                pending.set(false);
                match outcome {
                    Ok(content) => result.set(Some(content)),
                    Err(_) => {
                        error.set(Some("Failed to generate motivation. Please try again.".to_owned()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    });

    view! {
        <div class="motivation">
            <header class="motivation__header">
                <h1>"Daily Motivation"</h1>
                <p>"Share how you're feeling and get personalized motivation to boost your day"</p>
            </header>

            <div class="motivation__cards">
                <div class="motivation__card">
                    <h3>"Emotional Support"</h3>
                    <p>"Share your feelings and receive uplifting messages tailored to your mood."</p>
                </div>
                <div class="motivation__card">
                    <h3>"Success Tips"</h3>
                    <p>"Practical advice and strategies to help you achieve your goals."</p>
                </div>
            </div>

            <div class="motivation__form">
                {move || {
                    error.get().map(|message| {
                        view! { <div class="motivation__error">{message}</div> }
                    })
                }}

                <label class="motivation__label">
                    "How are you feeling today?"
                    <textarea
                        class="motivation__input"
                        placeholder="Share your thoughts and feelings..."
                        prop:value=move || feeling.get()
                        on:input=move |ev| feeling.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <button
                    class="btn btn--primary motivation__submit"
                    disabled=move || pending.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if pending.get() { "Generating..." } else { "Get Motivation" }}
                </button>
            </div>

            {move || {
                result.get().map(|content| {
                    view! {
                        <div class="motivation__result">
                            <h2>"Your Personalized Motivation"</h2>
                            <div class="motivation__quotes">
                                {content
                                    .quotes
                                    .iter()
                                    .map(|quote| {
                                        view! {
                                            <blockquote class="motivation__quote">
                                                <p>{format!("\u{201c}{}\u{201d}", quote.text)}</p>
                                                <footer>{format!("- {}", quote.author)}</footer>
                                            </blockquote>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <div class="motivation__tips">
                                <h3>"Personalized Tips"</h3>
                                <ul>
                                    {content
                                        .tips
                                        .iter()
                                        .map(|tip| view! { <li>{tip.text.clone()}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
