//! Transient notifications.
//!
//! [`notify`] pushes onto the shared [`ToastLog`] and schedules the
//! automatic dismissal; [`ToastStack`] only renders it.

use std::time::Duration;

use leptos::*;

use crate::{ToastLevel, ToastLog, TOAST_TTL_MS};

/// Show a notification and mirror it to the console.
pub fn notify(toasts: RwSignal<ToastLog>, level: ToastLevel, message: impl Into<String>) {
    let message = message.into();
    match level {
        ToastLevel::Error => log::error!("{}", message),
        ToastLevel::Warning => log::warn!("{}", message),
        _ => log::info!("{}", message),
    }

    if let Some(id) = toasts.try_update(|t| t.push(level, message)) {
        set_timeout(
            move || {
                toasts.try_update(|t| t.dismiss(id));
            },
            Duration::from_millis(TOAST_TTL_MS),
        );
    }
}

#[component]
pub fn ToastStack(toasts: RwSignal<ToastLog>) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.with(|t| t.entries().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.level.css_class())>
                            <span class="toast-time">"[" {toast.timestamp.clone()} "] "</span>
                            {toast.level.emoji()} " " {toast.message.clone()}
                            <button
                                class="toast-close"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
