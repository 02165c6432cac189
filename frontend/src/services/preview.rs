//! Browser object-URL previews for staged `File`s.

use web_sys::{File, Url};

use crate::types::{AppError, AppResult};
use crate::wizard::{ImageFile, PreviewUrls};

impl ImageFile for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn mime_type(&self) -> String {
        self.type_()
    }

    fn size(&self) -> u64 {
        // Blob sizes are whole numbers reported as f64
        web_sys::Blob::size(self) as u64
    }
}

/// `URL.createObjectURL` / `URL.revokeObjectURL`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPreviews;

impl PreviewUrls for BrowserPreviews {
    type File = File;

    fn create(&self, file: &File) -> AppResult<String> {
        Url::create_object_url_with_blob(file)
            .map_err(|e| AppError::Preview(format!("Failed to create preview for {}: {:?}", file.name(), e)))
    }

    fn revoke(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Failed to revoke preview {}: {:?}", url, e);
        }
    }
}
