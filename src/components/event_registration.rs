//! Event registration modal: attendee details, then payment.

use leptos::prelude::*;

use crate::components::upi_payment::UpiPayment;
use crate::net::types::Event;
#[cfg(feature = "hydrate")]
use crate::net::types::EventRegistration as RegistrationForm;

/// Two-step booking dialog for students: collect attendee details and
/// reserve the seat, then show the UPI payment panel.
#[component]
pub fn EventRegistrationDialog(event: Event, on_close: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let reg_no = RwSignal::new(String::new());
    let needs_accommodation = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);
    let paid_step = RwSignal::new(false);

    let event_id = event.id.clone();
    let event_title = event.title.clone();
    let fee = event.fee.unwrap_or(99);

    let submit = Callback::new(move |()| {
        // Ignore duplicate submissions while one is pending.
        if pending.get() || name.get().trim().is_empty() || reg_no.get().trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let event_id = event_id.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let registration = RegistrationForm {
                    event_id: event_id.clone(),
                    name: name.get_untracked().trim().to_owned(),
                    reg_no: reg_no.get_untracked().trim().to_owned(),
                    needs_accommodation: needs_accommodation.get_untracked(),
                };
                let outcome = async {
                    crate::net::api::register_for_event(&registration).await?;
                    crate::net::api::book_event(&event_id).await
                }
                .await;
                pending.set(false);
                match outcome {
                    Ok(()) => paid_step.set(true),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &event_id;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <Show
                    when=move || !paid_step.get()
                    fallback=move || view! {
                        <div>
                            <UpiPayment amount=fee/>
                            <button class="btn dialog__close" on:click=move |_| on_close.run(())>
                                "Close"
                            </button>
                        </div>
                    }
                >
                    <h2>{format!("Register for {event_title}")}</h2>

                    {move || {
                        error.get().map(|message| {
                            view! { <div class="dialog__error">{message}</div> }
                        })
                    }}

                    <label class="dialog__label">
                        "Full Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Registration Number"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || reg_no.get()
                            on:input=move |ev| reg_no.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || needs_accommodation.get()
                            on:change=move |ev| needs_accommodation.set(event_target_checked(&ev))
                        />
                        "I need accommodation"
                    </label>

                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || pending.get()
                            on:click=move |_| submit.run(())
                        >
                            {move || if pending.get() { "Booking..." } else { "Proceed to Payment" }}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
