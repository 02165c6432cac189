//! UI Components for the owner dashboard.
//!
//! # Layout Components
//! - [`Header`] - Brand, sign-in status and "add property" action
//! - [`Hero`] - Page title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`PropertyWizardForm`] - Four-step property submission wizard
//! - `StepIndicator` - Wizard progress through the steps
//! - [`ImagePicker`] - Photo selection with thumbnails
//! - [`ProgressBar`] - Coarse submission progress
//! - [`PropertyList`] - The owner's existing listings
//! - [`ToastStack`] - Transient notifications

mod header;
mod hero;
mod footer;
mod wizard;
mod step_indicator;
mod image_picker;
mod progress;
mod property_list;
mod toasts;

pub use header::*;
pub use hero::*;
pub use footer::*;
pub use wizard::*;
pub use step_indicator::*;
pub use image_picker::*;
pub use progress::*;
pub use property_list::*;
pub use toasts::*;
