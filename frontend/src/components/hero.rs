//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"My properties"</h1>
            <p class="subtitle">
                "List your apartment, villa or chalet for vacation rental. "
                "New listings are reviewed before they appear to guests."
            </p>
        </div>
    }
}
