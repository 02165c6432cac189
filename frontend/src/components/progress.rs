//! Coarse submission progress bar.

use leptos::*;

#[component]
pub fn ProgressBar(
    /// Percentage, 0-100
    percent: ReadSignal<u8>,
) -> impl IntoView {
    let width = move || format!("width: {}%;", percent.get().min(100));
    let label = move || match percent.get() {
        0 => "Creating property...".to_string(),
        100 => "Done!".to_string(),
        p => format!("Uploading photos... {}%", p),
    };

    view! {
        <div class="progress-section show">
            <div class="progress-bar">
                <div class="progress-fill" style=width></div>
            </div>
            <div class="progress-label">{label}</div>
        </div>
    }
}
