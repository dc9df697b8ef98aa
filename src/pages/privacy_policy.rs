//! Static privacy policy page.

use leptos::prelude::*;

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <div class="static-page">
            <h1>"Privacy Policy"</h1>

            <section>
                <h2>"What We Collect"</h2>
                <p>
                    "We store the profile details you provide at registration (name, email, \
                     role) and the bookings you make. Your password is never stored by this \
                     application; authentication is handled by the backend service."
                </p>
            </section>

            <section>
                <h2>"How We Use It"</h2>
                <p>
                    "Your details are used to manage event registrations, show organizers \
                     who is attending, and deliver notifications about events you follow. \
                     We do not share your data with third parties."
                </p>
            </section>

            <section>
                <h2>"Your Session"</h2>
                <p>
                    "A sign-in token is kept in your browser's local storage so you stay \
                     signed in between visits. Signing out removes it immediately."
                </p>
            </section>
        </div>
    }
}
