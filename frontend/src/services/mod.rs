//! Backend and browser services.
//!
//! # Services
//!
//! - [`property`] - Property API (create, upload images, list)
//! - [`preview`] - Object-URL thumbnails for staged images

pub mod property;
pub mod preview;

pub use property::*;
pub use preview::*;
