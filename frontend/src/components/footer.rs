//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2025 Sakan • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://sakan.app/help" class="footer-link" target="_blank">
                    "Help center"
                </a>
                <a href="https://sakan.app/terms" class="footer-link" target="_blank">
                    "Host terms"
                </a>
            </div>
        </footer>
    }
}
