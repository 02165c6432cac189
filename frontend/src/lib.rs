//! Sakan - Owner dashboard (Rust/Leptos)
//!
//! A WebAssembly front end where hosts list vacation rentals: a
//! four-step submission wizard plus the list of their own properties.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (AppContext)                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (sign-in status, add property)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Dashboard                                                   │
//! │  ├── Hero                                                    │
//! │  ├── PropertyWizardForm (when adding)                        │
//! │  │     └── wizard::PropertyWizard ── services::PropertyService│
//! │  └── PropertyList (refreshed after a submission)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastStack • Footer                                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Constants and the explicitly passed [`AppContext`]
//! - [`types`] - Errors, notifications, API responses
//! - [`models`] - The property draft
//! - [`wizard`] - Step machine, validation, image staging, submission
//! - [`services`] - Property API and browser previews
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod models;
pub mod wizard;
pub mod services;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Notifications
    Toast, ToastLevel, ToastLog,
    // API
    CreatedProperty, UploadedImages, PropertySummary,
    // Errors
    AppError, AppResult,
};

// Models
pub use models::{PropertyDraft, PropertyType, RentalType};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Mount the dashboard. Called by the trunk binary or by a JS host.
#[wasm_bindgen]
pub fn run_app() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Sakan dashboard - Starting Leptos App");

    // Read the auth token once; everything below receives it explicitly
    let ctx = AppContext::from_browser();

    mount_to_body(move || view! { <App ctx=ctx.clone()/> });
}

#[component]
pub fn App(ctx: AppContext) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=move || view! { <Dashboard ctx=ctx.clone()/> }/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Dashboard(ctx: AppContext) -> impl IntoView {
    let service = services::HttpPropertyService::new(&ctx);
    let wizard_service = service.clone();

    let toasts = create_rw_signal(ToastLog::new());
    let (wizard_open, set_wizard_open) = create_signal(false);
    let (refresh, set_refresh) = create_signal(0u32);

    let on_add = Callback::new(move |_: ()| set_wizard_open.set(true));
    let on_cancel = Callback::new(move |_: ()| set_wizard_open.set(false));
    let on_success = Callback::new(move |property_id: String| {
        log::info!("🏠 Property {} submitted, refreshing list", property_id);
        set_wizard_open.set(false);
        set_refresh.update(|n| *n += 1);
    });

    view! {
        <Header signed_in=ctx.is_signed_in() on_add=on_add/>

        <div class="container">
            <Hero/>

            // Mounting creates a fresh draft, unmounting discards it
            <Show
                when=move || wizard_open.get()
                fallback=|| view! { }
            >
                <PropertyWizardForm
                    service=wizard_service.clone()
                    toasts=toasts
                    on_success=on_success
                    on_cancel=on_cancel
                />
            </Show>

            <PropertyList service=service refresh=refresh/>
        </div>

        <ToastStack toasts=toasts/>
        <Footer/>
    }
}
