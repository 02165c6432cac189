//! Application configuration.
//!
//! Compile-time constants for the owner dashboard plus [`AppContext`], the
//! runtime context built once at start-up and handed down as a prop.

/// Property API base URL.
pub const BACKEND_URL: &str = "http://localhost:5000";

/// Application name, used for the document title.
pub const APP_NAME: &str = "Sakan";

/// Local storage key written by the hosted identity widget.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Maximum size of a single property image (in bytes).
///
/// 10 MiB limit.
pub const MAX_IMAGE_SIZE: u64 = 10 * 1024 * 1024;

/// Minimum number of images a listing must carry.
pub const MIN_IMAGES: usize = 5;

/// Minimum length of the Arabic title, in characters.
pub const MIN_TITLE_AR_CHARS: usize = 10;

/// Minimum length of the Arabic description, in characters.
pub const MIN_DESCRIPTION_AR_CHARS: usize = 50;

/// Progress reported once the property exists and the image upload starts.
pub const UPLOAD_STARTED_PERCENT: u8 = 20;

/// Progress reported when submission has fully completed.
pub const UPLOAD_DONE_PERCENT: u8 = 100;

/// Delay between a successful submission and the parent refresh.
pub const SUCCESS_NOTIFY_DELAY_MS: u32 = 1_000;

/// Maximum notifications on screen at once.
pub const MAX_TOASTS: usize = 5;

/// Lifetime of a notification before it dismisses itself.
pub const TOAST_TTL_MS: u64 = 5_000;

/// Governorates offered by the location step.
pub const GOVERNORATES: &[&str] = &[
    "Cairo",
    "Giza",
    "Alexandria",
    "Matrouh",
    "Red Sea",
    "South Sinai",
    "Ismailia",
    "Luxor",
    "Aswan",
];

/// Runtime context shared by the dashboard and its children.
///
/// Built exactly once in the entry point and passed explicitly; nothing
/// below the root reads local storage on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    /// Base URL of the property API.
    pub api_base_url: String,
    /// Bearer token issued by the identity service, if signed in.
    pub auth_token: Option<String>,
}

impl AppContext {
    pub fn new(api_base_url: impl Into<String>, auth_token: Option<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            auth_token: auth_token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Read the token from local storage once and pair it with [`BACKEND_URL`].
    pub fn from_browser() -> Self {
        let token = gloo_utils::window()
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(AUTH_TOKEN_KEY).ok().flatten());

        if token.is_none() {
            log::warn!("No auth token found in local storage, requests will be anonymous");
        }

        Self::new(BACKEND_URL, token)
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_normalizes_inputs() {
        let ctx = AppContext::new("https://api.sakan.app/", Some("  ".to_string()));
        assert_eq!(ctx.api_base_url, "https://api.sakan.app");
        assert!(!ctx.is_signed_in());

        let ctx = AppContext::new(BACKEND_URL, Some("tok".to_string()));
        assert_eq!(ctx.auth_token.as_deref(), Some("tok"));
    }
}
