//! Site footer with informational links.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <h3>"College Event Manager"</h3>
                <p>"Your one-stop solution for college events"</p>
            </div>
            <div class="footer__links">
                <a class="footer__link" href="/about">"About"</a>
                <a class="footer__link" href="/privacy-policy">"Privacy Policy"</a>
            </div>
            <div class="footer__legal">
                <p>"© College Event Manager. All rights reserved."</p>
            </div>
        </footer>
    }
}
