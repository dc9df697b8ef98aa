//! Payment verification page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::upi_payment::UpiPayment;

/// Landing page after checkout: verifies the `session_id` query parameter
/// against the backend. Success returns to the events listing; a missing
/// session id redirects there immediately. A UPI panel stays available for
/// direct payment.
#[component]
pub fn PaymentPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    let error = RwSignal::new(None::<String>);
    let verifying = RwSignal::new(true);

    Effect::new(move || {
        let Some(session_id) = query.get().get("session_id") else {
            navigate("/events", NavigateOptions::default());
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::verify_payment(&session_id).await;
                verifying.set(false);
                match outcome {
                    Ok(verification) if verification.success => {
                        navigate("/events", NavigateOptions::default());
                    }
                    Ok(verification) => {
                        error.set(Some(verification.message.unwrap_or_else(|| {
                            "Payment verification failed. Please contact support.".to_owned()
                        })));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session_id;
        }
    });

    let back = Callback::new({
        let navigate = use_navigate();
        move |()| navigate("/events", NavigateOptions::default())
    });

    view! {
        <div class="payment">
            {move || match (verifying.get(), error.get()) {
                (true, _) => view! {
                    <div class="payment__status">
                        <h1>"Verifying Payment..."</h1>
                        <p>"Please wait while we verify your payment."</p>
                    </div>
                }
                    .into_any(),
                (false, Some(message)) => view! {
                    <div class="payment__status">
                        <div class="payment__error">{message}</div>
                        <button class="btn btn--primary" on:click=move |_| back.run(())>
                            "Return to Events"
                        </button>
                        <UpiPayment/>
                    </div>
                }
                    .into_any(),
                (false, None) => view! {
                    <div class="payment__status">
                        <h1>"Processing Payment..."</h1>
                        <p>"Please wait while we verify your payment."</p>
                    </div>
                }
                    .into_any(),
            }}
        </div>
    }
}
