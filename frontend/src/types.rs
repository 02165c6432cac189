//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Notification Types** - Transient toasts shown to the owner
//! - **API Types** - Property service response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::MAX_TOASTS;

// =============================================================================
// Notification Types
// =============================================================================

/// Toast severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Success => "toast-success",
            ToastLevel::Warning => "toast-warning",
            ToastLevel::Error => "toast-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            ToastLevel::Info => "ℹ️",
            ToastLevel::Success => "✅",
            ToastLevel::Warning => "⚠️",
            ToastLevel::Error => "❌",
        }
    }
}

/// A single notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

/// Bounded list of live notifications.
///
/// Oldest entries are evicted once [`MAX_TOASTS`] is exceeded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastLog {
    entries: Vec<Toast>,
    next_id: u64,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.entries.push(Toast {
            id,
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        });
        if self.entries.len() > MAX_TOASTS {
            self.entries.remove(0);
        }
        id
    }

    /// Remove a notification; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the create-property endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatedProperty {
    /// Opaque identifier, only used to attach images
    #[serde(alias = "_id", alias = "propertyId", alias = "property_id")]
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Response from the image upload endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UploadedImages {
    /// Public URLs of the stored images
    #[serde(default, alias = "images")]
    pub urls: Vec<String>,
}

/// Listing summary shown on the owner dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertySummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub title_ar: String,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub price_per_night: f64,
    #[serde(default)]
    pub image_count: usize,
    #[serde(default)]
    pub status: Option<String>,
}

/// Error body returned by the property service.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.trim().is_empty())
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Fallback shown for failures with no user-presentable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Frontend application errors.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// Request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// The property service answered with an error status.
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// Building the upload payload failed.
    #[error("Upload error: {0}")]
    Upload(String),

    /// A thumbnail could not be created for a staged file.
    #[error("Preview error: {0}")]
    Preview(String),

    /// Anything else.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    /// Text suitable for a notification.
    ///
    /// Server messages are shown verbatim, unexpected failures collapse
    /// to [`GENERIC_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            AppError::Service { message, .. } => message.clone(),
            AppError::Upload(msg) | AppError::Preview(msg) => msg.clone(),
            AppError::Network(_) => "Could not reach the server. Check your connection.".to_string(),
            AppError::Unexpected(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
