//! UPI payment panel: deep link button plus a scannable QR code.

use leptos::prelude::*;

use crate::util::upi;

/// Payment panel for an event fee. The button opens the UPI deep link in
/// the device's payment app; the QR code offers the same link to scan.
#[component]
pub fn UpiPayment(
    #[prop(default = 99)] amount: u32,
    #[prop(into, default = String::from("events@okicici"))] upi_id: String,
    #[prop(into, default = String::from("College Events"))] payee_name: String,
) -> impl IntoView {
    let link = upi::payment_link(&upi_id, &payee_name, amount);
    let qr_src = upi::qr_code_url(&link);

    let pay = {
        let link = link.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&link);
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &link;
            }
        }
    };

    view! {
        <div class="upi-payment">
            <h2 class="upi-payment__title">"Make a Payment"</h2>
            <p class="upi-payment__subtitle">"Pay securely via UPI"</p>

            <div class="upi-payment__summary">
                <div class="upi-payment__row">
                    <span>"Amount"</span>
                    <span class="upi-payment__amount">{format!("₹{amount}")}</span>
                </div>
                <div class="upi-payment__row">
                    <span>"UPI ID"</span>
                    <span class="upi-payment__id">{upi_id.clone()}</span>
                </div>
            </div>

            <button class="btn btn--primary upi-payment__pay" on:click=pay>
                {format!("Pay ₹{amount} Now")}
            </button>

            <div class="upi-payment__qr">
                <p>"Or scan this QR code to pay"</p>
                <img src=qr_src alt="Pay via UPI QR"/>
            </div>
        </div>
    }
}
