//! Staged images and their preview URIs.
//!
//! A preview URI is a browser resource handle. Each one is owned by a
//! [`PreviewUrl`] which revokes it on drop, so the URI is released exactly
//! once whether the image is removed, the staging area is cleared, or the
//! wizard owning it is torn down.

use std::fmt;
use std::rc::Rc;

use crate::config::MAX_IMAGE_SIZE;
use crate::types::AppResult;

/// Metadata the staging rules need from a selected file.
pub trait ImageFile {
    fn name(&self) -> String;
    fn mime_type(&self) -> String;
    /// Size in bytes.
    fn size(&self) -> u64;
}

/// Creates and releases thumbnail URIs for staged files.
pub trait PreviewUrls {
    type File: ImageFile + Clone;

    fn create(&self, file: &Self::File) -> AppResult<String>;
    fn revoke(&self, url: &str);
}

/// Whether a file may be staged at all.
pub fn is_acceptable_image<F: ImageFile>(file: &F) -> bool {
    file.mime_type().starts_with("image/") && file.size() <= MAX_IMAGE_SIZE
}

// =============================================================================
// Preview handle
// =============================================================================

/// Owning handle for one preview URI.
pub struct PreviewUrl<P: PreviewUrls> {
    url: String,
    owner: Rc<P>,
}

impl<P: PreviewUrls> PreviewUrl<P> {
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl<P: PreviewUrls> Drop for PreviewUrl<P> {
    fn drop(&mut self) {
        self.owner.revoke(&self.url);
    }
}

impl<P: PreviewUrls> fmt::Debug for PreviewUrl<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreviewUrl").field(&self.url).finish()
    }
}

/// A file selected for upload together with its thumbnail.
pub struct StagedImage<P: PreviewUrls> {
    file: P::File,
    preview: PreviewUrl<P>,
}

impl<P: PreviewUrls> StagedImage<P> {
    pub fn file(&self) -> &P::File {
        &self.file
    }

    pub fn preview_url(&self) -> &str {
        self.preview.as_str()
    }

    pub fn name(&self) -> String {
        self.file.name()
    }
}

// =============================================================================
// Staging area
// =============================================================================

/// Outcome of staging one selection batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageReport {
    pub accepted: usize,
    pub rejected: usize,
}

impl StageReport {
    /// One aggregate warning for the whole batch, if anything was dropped.
    pub fn warning(&self) -> Option<String> {
        (self.rejected > 0).then(|| {
            format!(
                "{} file(s) were skipped: only images up to {} MB are accepted",
                self.rejected,
                MAX_IMAGE_SIZE / (1024 * 1024)
            )
        })
    }
}

/// Ordered list of staged images, owned by a single wizard.
pub struct ImageStaging<P: PreviewUrls> {
    previews: Rc<P>,
    images: Vec<StagedImage<P>>,
}

impl<P: PreviewUrls> ImageStaging<P> {
    pub fn new(previews: Rc<P>) -> Self {
        Self {
            previews,
            images: Vec::new(),
        }
    }

    /// Append every acceptable file of `batch`, in order.
    ///
    /// Rejected files are skipped silently; the caller reports them once
    /// through [`StageReport::warning`].
    pub fn stage<I>(&mut self, batch: I) -> StageReport
    where
        I: IntoIterator<Item = P::File>,
    {
        let mut report = StageReport::default();

        for file in batch {
            if !is_acceptable_image(&file) {
                log::warn!(
                    "Skipping '{}' ({}, {} bytes)",
                    file.name(),
                    file.mime_type(),
                    file.size()
                );
                report.rejected += 1;
                continue;
            }

            match self.previews.create(&file) {
                Ok(url) => {
                    let preview = PreviewUrl {
                        url,
                        owner: Rc::clone(&self.previews),
                    };
                    self.images.push(StagedImage { file, preview });
                    report.accepted += 1;
                }
                Err(e) => {
                    log::warn!("Could not preview '{}': {}", file.name(), e);
                    report.rejected += 1;
                }
            }
        }

        report
    }

    /// Remove the image at `index`, releasing its preview.
    pub fn remove(&mut self, index: usize) -> Option<P::File> {
        if index >= self.images.len() {
            return None;
        }
        let StagedImage { file, preview } = self.images.remove(index);
        drop(preview);
        Some(file)
    }

    /// Release every preview and forget all files.
    pub fn clear(&mut self) {
        self.images.clear();
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn images(&self) -> &[StagedImage<P>] {
        &self.images
    }

    /// Clones of the staged files, in display order.
    pub fn files(&self) -> Vec<P::File> {
        self.images.iter().map(|i| i.file.clone()).collect()
    }

    #[cfg(test)]
    pub fn preview_urls(&self) -> Vec<String> {
        self.images.iter().map(|i| i.preview.url.clone()).collect()
    }
}
