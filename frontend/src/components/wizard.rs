//! "Add property" wizard.
//!
//! Binds form inputs to a [`PropertyWizard`] held in a signal and drives
//! [`submit_property`] on the last step. All state lives in the wizard;
//! this component only renders it.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use super::image_picker::ImagePicker;
use super::progress::ProgressBar;
use super::step_indicator::StepIndicator;
use super::toasts::notify;
use crate::models::{parse_number, PropertyDraft, PropertyType, RentalType};
use crate::services::{BrowserPreviews, HttpPropertyService};
use crate::wizard::{submit_property, PropertyWizard, WizardStep};
use crate::{ToastLevel, ToastLog, GOVERNORATES, SUCCESS_NOTIFY_DELAY_MS};

pub type WizardSignal = RwSignal<PropertyWizard<BrowserPreviews>>;

#[component]
pub fn PropertyWizardForm(
    service: HttpPropertyService,
    toasts: RwSignal<ToastLog>,
    /// Called with the new property id once everything is stored
    on_success: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let wizard: WizardSignal = create_rw_signal(PropertyWizard::new(Rc::new(BrowserPreviews)));
    let step = create_memo(move |_| wizard.with(|w| w.step()));
    let (progress, set_progress) = create_signal(0u8);
    let service = store_value(service);

    // Unmounting releases every preview still staged
    on_cleanup(move || {
        wizard.try_update(|w| w.cancel());
    });

    let go_next = move |_| {
        wizard.update(|w| {
            if let Err(e) = w.next() {
                log::debug!("Step {} blocked: {}", w.step().number(), e);
            }
        });
    };

    let go_previous = move |_| {
        wizard.update(|w| {
            w.previous();
        });
    };

    let cancel = move |_| {
        log::info!("🚫 Property wizard cancelled");
        wizard.update(|w| w.cancel());
        on_cancel.call(());
    };

    let submit = move |_| {
        let request = match wizard.try_update(|w| w.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                log::warn!("Submit blocked: {}", e);
                return;
            }
            None => return,
        };

        set_progress.set(0);
        let service = service.get_value();

        spawn_local(async move {
            let result = submit_property(&service, request, |p| set_progress.set(p)).await;

            match &result {
                Ok(outcome) => {
                    notify(
                        toasts,
                        ToastLevel::Success,
                        format!(
                            "Property submitted with {} photos and is pending review",
                            outcome.images_uploaded
                        ),
                    );
                    TimeoutFuture::new(SUCCESS_NOTIFY_DELAY_MS).await;
                    wizard.try_update(|w| w.finish_submit(&result));
                    on_success.call(outcome.property_id.clone());
                }
                Err(e) => {
                    notify(toasts, ToastLevel::Error, e.user_message());
                    wizard.try_update(|w| w.finish_submit(&result));
                }
            }
        });
    };

    let error = move || wizard.with(|w| w.error().map(|e| e.to_string()));
    let submitting = move || step.get() == WizardStep::Submitting;

    view! {
        <div class="wizard">
            <div class="wizard-header">
                <div class="wizard-title">"🏠 New property"</div>
                <button class="btn btn-secondary" on:click=cancel disabled=submitting>
                    "Cancel"
                </button>
            </div>

            <StepIndicator step=step/>

            <div class="wizard-body">
                {move || match step.get() {
                    WizardStep::BasicInfo => basic_info_step(wizard).into_view(),
                    WizardStep::Location => location_step(wizard).into_view(),
                    WizardStep::DetailsPricing => details_step(wizard).into_view(),
                    WizardStep::Photos | WizardStep::Submitting => {
                        view! { <ImagePicker wizard=wizard toasts=toasts/> }.into_view()
                    }
                }}
            </div>

            <Show when=move || error().is_some() fallback=|| view! {}>
                <div class="error-message">{move || error().unwrap_or_default()}</div>
            </Show>

            <Show when=submitting fallback=|| view! {}>
                <ProgressBar percent=progress/>
            </Show>

            <div class="wizard-footer">
                <Show when=move || { step.get().number() > 1 && !submitting() } fallback=|| view! {}>
                    <button class="btn btn-secondary" on:click=go_previous>"← Previous"</button>
                </Show>
                {move || {
                    if step.get().number() < 4 {
                        view! {
                            <button class="btn btn-primary" on:click=go_next>"Next →"</button>
                        }
                        .into_view()
                    } else {
                        view! {
                            <button class="btn btn-primary" on:click=submit disabled=submitting>
                                {move || if submitting() { "⏳ Submitting..." } else { "Submit property" }}
                            </button>
                        }
                        .into_view()
                    }
                }}
            </div>
        </div>
    }
}

// =============================================================================
// Steps
// =============================================================================

fn basic_info_step(wizard: WizardSignal) -> impl IntoView {
    view! {
        <div class="wizard-step-content">
            {text_field(wizard, "Title (Arabic) *", "rtl", |d| d.title_ar.clone(), |d, v| d.title_ar = v)}
            {text_field(wizard, "Title (English)", "ltr", |d| d.title_en.clone(), |d, v| d.title_en = v)}
            {text_area(wizard, "Description (Arabic) *", "rtl", |d| d.description_ar.clone(), |d, v| d.description_ar = v)}
            {text_area(wizard, "Description (English)", "ltr", |d| d.description_en.clone(), |d, v| d.description_en = v)}

            <label class="form-field">
                <span class="form-label">"Property type *"</span>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.draft_mut().property_type = value.parse::<PropertyType>().ok());
                }>
                    <option value="">"Select..."</option>
                    {PropertyType::ALL
                        .into_iter()
                        .map(|t| {
                            let selected = wizard.with_untracked(|w| w.draft().property_type == Some(t));
                            view! { <option value=t.as_str() selected=selected>{t.label()}</option> }
                        })
                        .collect_view()}
                </select>
            </label>

            <label class="form-field">
                <span class="form-label">"Rental type"</span>
                <select on:change=move |ev| {
                    if let Ok(rental) = event_target_value(&ev).parse::<RentalType>() {
                        wizard.update(|w| w.draft_mut().rental_type = rental);
                    }
                }>
                    {RentalType::ALL
                        .into_iter()
                        .map(|t| {
                            let selected = wizard.with_untracked(|w| w.draft().rental_type == t);
                            view! { <option value=t.as_str() selected=selected>{t.label()}</option> }
                        })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}

fn location_step(wizard: WizardSignal) -> impl IntoView {
    view! {
        <div class="wizard-step-content">
            <label class="form-field">
                <span class="form-label">"Governorate *"</span>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.draft_mut().governorate = value);
                }>
                    <option value="">"Select..."</option>
                    {GOVERNORATES
                        .iter()
                        .map(|g| {
                            let selected = wizard.with_untracked(|w| w.draft().governorate == *g);
                            view! { <option value=*g selected=selected>{*g}</option> }
                        })
                        .collect_view()}
                </select>
            </label>
            {text_field(wizard, "City *", "auto", |d| d.city.clone(), |d, v| d.city = v)}
            {text_field(wizard, "Neighborhood", "auto", |d| d.neighborhood.clone(), |d, v| d.neighborhood = v)}
        </div>
    }
}

fn details_step(wizard: WizardSignal) -> impl IntoView {
    view! {
        <div class="wizard-step-content">
            <div class="form-row">
                {number_field(wizard, "Bedrooms *", |d| d.bedrooms.to_string(), |d, v| d.bedrooms = parse_number(v, d.bedrooms))}
                {number_field(wizard, "Bathrooms *", |d| d.bathrooms.to_string(), |d, v| d.bathrooms = parse_number(v, d.bathrooms))}
                {number_field(wizard, "Max guests *", |d| d.max_guests.to_string(), |d, v| d.max_guests = parse_number(v, d.max_guests))}
                {number_field(wizard, "Area (m²)", |d| d.area_sqm.to_string(), |d, v| d.area_sqm = parse_number(v, d.area_sqm))}
            </div>
            <div class="form-row">
                {checkbox(wizard, "Furnished", |d| d.furnished, |d, v| d.furnished = v)}
                {checkbox(wizard, "Pets allowed", |d| d.pets_allowed, |d, v| d.pets_allowed = v)}
            </div>
            <div class="form-row">
                {number_field(wizard, "Price per night (EGP) *", |d| d.price_per_night.to_string(), |d, v| d.price_per_night = parse_number(v, d.price_per_night))}
                {number_field(wizard, "Cleaning fee (EGP)", |d| d.cleaning_fee.to_string(), |d, v| d.cleaning_fee = parse_number(v, d.cleaning_fee))}
                {number_field(wizard, "Minimum stay (nights)", |d| d.min_stay_nights.to_string(), |d, v| d.min_stay_nights = parse_number(v, d.min_stay_nights))}
            </div>
        </div>
    }
}

// =============================================================================
// Field helpers
// =============================================================================
//
// Inputs are seeded from the draft when their step mounts and only write
// back afterwards, so typing never round-trips through the signal.

fn text_field(
    wizard: WizardSignal,
    label: &'static str,
    dir: &'static str,
    get: fn(&PropertyDraft) -> String,
    set: fn(&mut PropertyDraft, String),
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type="text"
                dir=dir
                prop:value=wizard.with_untracked(|w| get(w.draft()))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| set(w.draft_mut(), value));
                }
            />
        </label>
    }
}

fn text_area(
    wizard: WizardSignal,
    label: &'static str,
    dir: &'static str,
    get: fn(&PropertyDraft) -> String,
    set: fn(&mut PropertyDraft, String),
) -> impl IntoView {
    let length = move || wizard.with(|w| get(w.draft()).chars().count());

    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <textarea
                rows=4
                dir=dir
                prop:value=wizard.with_untracked(|w| get(w.draft()))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| set(w.draft_mut(), value));
                }
            ></textarea>
            <span class="form-hint">{move || format!("{} characters", length())}</span>
        </label>
    }
}

fn number_field(
    wizard: WizardSignal,
    label: &'static str,
    get: fn(&PropertyDraft) -> String,
    set: fn(&mut PropertyDraft, &str),
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type="number"
                min="0"
                prop:value=wizard.with_untracked(|w| get(w.draft()))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| set(w.draft_mut(), &value));
                }
            />
        </label>
    }
}

fn checkbox(
    wizard: WizardSignal,
    label: &'static str,
    get: fn(&PropertyDraft) -> bool,
    set: fn(&mut PropertyDraft, bool),
) -> impl IntoView {
    view! {
        <label class="form-check">
            <input
                type="checkbox"
                prop:checked=wizard.with_untracked(|w| get(w.draft()))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    wizard.update(|w| set(w.draft_mut(), checked));
                }
            />
            <span>{label}</span>
        </label>
    }
}
