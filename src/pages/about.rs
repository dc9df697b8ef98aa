//! Static about page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="static-page">
            <h1>"About College Event Manager"</h1>

            <section>
                <h2>"Our Mission"</h2>
                <p>
                    "College Event Manager is designed to streamline and enhance the event \
                     management process for educational institutions. Our platform connects \
                     students, organizers, and administrators in a seamless ecosystem for \
                     creating, managing, and participating in college events."
                </p>
            </section>

            <section>
                <h2>"Key Features"</h2>
                <ul>
                    <li>"Easy event creation and management for organizers"</li>
                    <li>"Seamless registration process for students"</li>
                    <li>"Real-time event updates and notifications"</li>
                    <li>"Secure payment processing for event fees"</li>
                    <li>"Mobile-friendly interface for on-the-go access"</li>
                </ul>
            </section>

            <section>
                <h2>"Our Team"</h2>
                <p>
                    "We are a dedicated team of developers and educators committed to \
                     improving the event management experience in educational institutions."
                </p>
            </section>
        </div>
    }
}
