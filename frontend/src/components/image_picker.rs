//! Photo selection with thumbnails.
//!
//! Files are filtered when picked; anything that is not an image or is
//! larger than the size limit is dropped with one warning per batch.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement};

use super::toasts::notify;
use super::wizard::WizardSignal;
use crate::{ToastLevel, ToastLog, MAX_IMAGE_SIZE, MIN_IMAGES};

#[component]
pub fn ImagePicker(wizard: WizardSignal, toasts: RwSignal<ToastLog>) -> impl IntoView {
    let on_files = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files: Vec<File> = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();

        if files.is_empty() {
            return;
        }

        let report = wizard.try_update(|w| w.stage_images(files)).unwrap_or_default();
        log::info!("🖼️ Staged {} images ({} skipped)", report.accepted, report.rejected);
        if let Some(warning) = report.warning() {
            notify(toasts, ToastLevel::Warning, warning);
        }

        // Allow picking the same file again after removing it
        input.set_value("");
    };

    let trigger_file_input = move |_| {
        if let Some(input) = gloo_utils::document().get_element_by_id("photoInput") {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    let thumbnails = move || {
        wizard.with(|w| {
            w.images()
                .iter()
                .enumerate()
                .map(|(idx, img)| (idx, img.preview_url().to_string(), img.name()))
                .collect::<Vec<_>>()
        })
    };
    let count = move || wizard.with(|w| w.images().len());
    let locked = move || wizard.with(|w| w.is_submitting());

    view! {
        <div class="image-picker">
            <div class="upload-section" on:click=trigger_file_input>
                <div class="upload-icon">"📷"</div>
                <div class="upload-text">"Add photos of your property"</div>
                <div class="upload-hint">
                    {format!(
                        "At least {} images • JPG, PNG or WebP • up to {} MB each",
                        MIN_IMAGES,
                        MAX_IMAGE_SIZE / (1024 * 1024)
                    )}
                </div>
            </div>
            <input
                type="file"
                id="photoInput"
                accept="image/*"
                multiple=true
                style="display:none"
                on:change=on_files
                disabled=locked
            />

            <div class="image-count" class:ok=move || { count() >= MIN_IMAGES }>
                {move || format!("{} / {} photos", count(), MIN_IMAGES)}
            </div>

            <div class="image-grid">
                // Keyed by position too, so shifted thumbnails get fresh indices
                <For
                    each=thumbnails
                    key=|(idx, url, _)| (*idx, url.clone())
                    children=move |(idx, url, name)| {
                        view! {
                            <div class="image-thumb">
                                <img src=url alt=name.clone()/>
                                {(idx == 0).then(|| view! { <span class="cover-badge">"Cover"</span> })}
                                <button
                                    class="image-remove"
                                    title=format!("Remove {}", name)
                                    disabled=locked
                                    on:click=move |_| {
                                        wizard.update(|w| {
                                            w.remove_image(idx);
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
