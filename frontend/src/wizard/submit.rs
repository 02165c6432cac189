//! Two-phase property submission.
//!
//! ```text
//! create_property(draft) ──▶ id ──▶ upload_property_images(id, files)
//!        │ fails                           │ fails
//!        ▼                                 ▼
//!   CreateFailed                 UploadFailed { property_id }
//!   (nothing persisted)          (property kept, zero images)
//! ```
//!
//! The write is not atomic: a failed upload leaves the created property in
//! place and nothing is deleted or retried here.

use thiserror::Error;

use crate::config::{UPLOAD_DONE_PERCENT, UPLOAD_STARTED_PERCENT};
use crate::models::PropertyDraft;
use crate::services::PropertyService;
use crate::types::AppError;

/// Everything needed to submit, captured when the wizard enters `Submitting`.
#[derive(Clone, Debug)]
pub struct SubmissionRequest<F> {
    pub draft: PropertyDraft,
    pub files: Vec<F>,
}

/// A fully successful submission.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitOutcome {
    pub property_id: String,
    pub images_uploaded: usize,
}

/// Which phase failed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SubmitError {
    /// The property was not created; nothing was persisted.
    #[error("Create property failed: {0}")]
    CreateFailed(#[source] AppError),

    /// The property exists but none of its images were stored.
    #[error("Image upload for property {property_id} failed: {source}")]
    UploadFailed {
        property_id: String,
        source: AppError,
    },
}

impl SubmitError {
    /// Text for the failure notification.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::CreateFailed(e) => e.user_message(),
            SubmitError::UploadFailed { source, .. } => {
                format!("Property saved, but photos failed to upload: {}", source.user_message())
            }
        }
    }
}

pub type SubmitResult = Result<SubmitOutcome, SubmitError>;

/// Create the property, then upload its images in one batch.
///
/// `on_progress` receives coarse percentages: [`UPLOAD_STARTED_PERCENT`]
/// when the upload begins and [`UPLOAD_DONE_PERCENT`] at the end.
pub async fn submit_property<S, P>(
    service: &S,
    request: SubmissionRequest<S::File>,
    mut on_progress: P,
) -> SubmitResult
where
    S: PropertyService + ?Sized,
    P: FnMut(u8),
{
    let SubmissionRequest { draft, files } = request;

    log::info!("📤 Creating property '{}'...", draft.display_title());
    let created = service
        .create_property(&draft)
        .await
        .map_err(|e| {
            log::error!("❌ Create property failed: {}", e);
            SubmitError::CreateFailed(e)
        })?;
    log::info!("✅ Property created: {}", created.id);

    if files.is_empty() {
        on_progress(UPLOAD_DONE_PERCENT);
        return Ok(SubmitOutcome {
            property_id: created.id,
            images_uploaded: 0,
        });
    }

    on_progress(UPLOAD_STARTED_PERCENT);
    log::info!("📤 Uploading {} images for {}...", files.len(), created.id);

    match service.upload_property_images(&created.id, &files).await {
        Ok(uploaded) => {
            on_progress(UPLOAD_DONE_PERCENT);
            log::info!(
                "✅ Uploaded {} images for {} ({} stored)",
                files.len(),
                created.id,
                uploaded.urls.len()
            );
            Ok(SubmitOutcome {
                property_id: created.id,
                images_uploaded: files.len(),
            })
        }
        Err(e) => {
            log::error!("❌ Image upload for {} failed: {}", created.id, e);
            Err(SubmitError::UploadFailed {
                property_id: created.id,
                source: e,
            })
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::wizard::staging::testing::five_photos;
    use futures::executor::block_on;

    fn request() -> SubmissionRequest<crate::wizard::staging::testing::FakeFile> {
        SubmissionRequest {
            draft: PropertyDraft {
                title_ar: "شقة فاخرة جدا".into(),
                price_per_night: 2000.0,
                ..Default::default()
            },
            files: five_photos(),
        }
    }

    #[test]
    fn test_create_then_upload_in_order() {
        let service = RecordingService::default();
        let mut progress = Vec::new();

        let outcome = block_on(submit_property(&service, request(), |p| progress.push(p))).unwrap();

        assert_eq!(outcome.property_id, "prop-1");
        assert_eq!(outcome.images_uploaded, 5);
        assert_eq!(progress, vec![20, 100]);

        let calls = service.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], Call::Create(_)));
        match &calls[1] {
            Call::Upload { property_id, files } => {
                assert_eq!(property_id, "prop-1");
                assert_eq!(files.len(), 5);
                assert_eq!(files[0], "photo1.jpg");
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_create_failure_skips_upload() {
        let service = RecordingService {
            fail_create: Some(AppError::Service {
                status: 401,
                message: "Session expired".into(),
            }),
            ..Default::default()
        };
        let mut progress = Vec::new();

        let err = block_on(submit_property(&service, request(), |p| progress.push(p))).unwrap_err();

        assert!(matches!(err, SubmitError::CreateFailed(_)));
        assert_eq!(err.user_message(), "Session expired");
        assert_eq!(service.calls().len(), 1);
        assert!(progress.is_empty());
    }

    #[test]
    fn test_upload_failure_keeps_created_property() {
        let service = RecordingService {
            fail_upload: Some(AppError::Network("connection reset".into())),
            ..Default::default()
        };
        let mut progress = Vec::new();

        let err = block_on(submit_property(&service, request(), |p| progress.push(p))).unwrap_err();

        match &err {
            SubmitError::UploadFailed { property_id, .. } => assert_eq!(property_id, "prop-1"),
            other => panic!("unexpected error {:?}", other),
        }
        // Started but never completed; no compensating call was issued
        assert_eq!(progress, vec![20]);
        assert_eq!(service.calls().len(), 2);
        assert!(err.user_message().starts_with("Property saved"));
    }

    #[test]
    fn test_submit_error_display_and_source() {
        use std::error::Error as _;

        let err = SubmitError::UploadFailed {
            property_id: "prop-7".into(),
            source: AppError::Network("timeout".into()),
        };
        assert_eq!(
            err.to_string(),
            "Image upload for property prop-7 failed: Network error: timeout"
        );
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("Network error: timeout".to_string())
        );

        let err = SubmitError::CreateFailed(AppError::Service {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(err.to_string(), "Create property failed: Service error (500): boom");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_no_files_completes_after_create() {
        let service = RecordingService::default();
        let mut progress = Vec::new();
        let req = SubmissionRequest {
            files: Vec::new(),
            ..request()
        };

        let outcome = block_on(submit_property(&service, req, |p| progress.push(p))).unwrap();
        assert_eq!(outcome.images_uploaded, 0);
        assert_eq!(progress, vec![100]);
        assert_eq!(service.calls().len(), 1);
    }
}
